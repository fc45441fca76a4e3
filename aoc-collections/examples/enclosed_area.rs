//! Enclosed area example for the collections crate
//!
//! This example demonstrates how to:
//! - Parse a character map into a `Grid` with a constant default
//! - Grow the grid's `Bounds` by one cell so the outside is connected
//! - Flood fill the outside with `Set` fringes and orthogonal neighbours
//! - Count the cells enclosed by the walls
//! - Render the result back to text

use aoc_collections::{Grid, Location, Set};

const MAP: &str = "\
..........
.#######..
.#.....#..
.#.###.#..
.#.#.#.#..
.#.###.#..
.#.....##.
.########.
..........";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Open,
    Wall,
}

fn main() -> anyhow::Result<()> {
    let mut map = Grid::with_default(Tile::Open);
    for (y, line) in MAP.lines().enumerate() {
        for (x, c) in line.chars().enumerate() {
            if c == '#' {
                map.set(Location::new(x as i64, y as i64), Tile::Wall);
            }
        }
    }
    println!("Parsed {} walls", map.len());

    let area = map.bounds()?.expand(1);
    let start = Location::new(area.x_min, area.y_min);

    let mut outside = Set::new();
    let mut fringe = Set::from_values([start]);
    while !fringe.is_empty() {
        let mut next = Set::new();
        for loc in &fringe {
            outside.add(*loc);
            for neighbour in loc.ortho_neighbours() {
                if !area.contains(neighbour) || outside.contains(&neighbour) {
                    continue;
                }
                if map.get(neighbour)? == Tile::Open {
                    next.add(neighbour);
                }
            }
        }
        fringe = next.subtract(&outside);
    }

    let mut enclosed = 0;
    for loc in area.locations() {
        if !outside.contains(&loc) && map.get(loc)? == Tile::Open {
            enclosed += 1;
        }
    }
    println!("Outside cells: {}", outside.len());
    println!("Enclosed cells: {}", enclosed);

    let drawn = map.render(|tile| match tile {
        Ok(Tile::Wall) => '#',
        Ok(Tile::Open) => '.',
        Err(_) => '?',
    });
    println!("\n{}", drawn);

    Ok(())
}
