use indexmap::{IndexMap, IndexSet};

use crate::state::geometry::{GridPoint, GridRect};
use crate::state::ident;

/// Width and height of a cell in grid units. Both are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSize {
    width: i64,
    height: i64,
}

impl CellSize {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn area(&self) -> i64 {
        self.width * self.height
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: GridPoint,
    pub size: CellSize,
    pub value: String,
    /// Cells carried along when this one moves. Not used for hit-testing or deletion.
    pub children: Vec<String>,
}

impl Cell {
    pub fn new(pos: GridPoint, size: CellSize, value: impl Into<String>) -> Self {
        Self {
            pos,
            size,
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Builds a cell covering exactly `rect`.
    pub fn covering(rect: GridRect, value: impl Into<String>) -> Self {
        Self::new(
            rect.top_left(),
            CellSize::new(rect.width(), rect.height()),
            value,
        )
    }

    pub fn bounds(&self) -> GridRect {
        GridRect {
            left: self.pos.x,
            top: self.pos.y,
            right: self.pos.x + self.size.width() - 1,
            bottom: self.pos.y + self.size.height() - 1,
        }
    }

    /// Half-open containment: `[x, x + width) × [y, y + height)`.
    pub fn contains(&self, point: GridPoint) -> bool {
        point.x >= self.pos.x
            && point.x < self.pos.x + self.size.width()
            && point.y >= self.pos.y
            && point.y < self.pos.y + self.size.height()
    }
}

/// All cells on the page, kept in insertion order. Later cells render on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellStore {
    cells: IndexMap<String, Cell>,
}

impl CellStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Cell> {
        self.cells.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cells.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(id, cell)| (id.as_str(), cell))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Innermost cell under `point`. Ties keep the earliest inserted cell.
    pub fn smallest_at(&self, point: GridPoint) -> Option<&str> {
        self.pick_at(point, |candidate, best| candidate < best)
    }

    /// Outermost cell under `point`. Ties keep the earliest inserted cell.
    pub fn largest_at(&self, point: GridPoint) -> Option<&str> {
        self.pick_at(point, |candidate, best| candidate > best)
    }

    pub fn insert(&mut self, id: impl Into<String>, cell: Cell) {
        self.cells.insert(id.into(), cell);
    }

    pub fn remove(&mut self, id: &str) -> Option<Cell> {
        self.cells.shift_remove(id)
    }

    /// Moves a cell's origin to `pos`. With `with_children`, each listed child
    /// that still exists is translated by the same delta.
    pub fn move_to(&mut self, id: &str, pos: GridPoint, with_children: bool) -> bool {
        let Some(cell) = self.cells.get(id) else {
            return false;
        };
        let (dx, dy) = cell.pos.delta_to(pos);
        self.translate(id, dx, dy, with_children)
    }

    pub fn translate(&mut self, id: &str, dx: i64, dy: i64, with_children: bool) -> bool {
        let Some(cell) = self.cells.get_mut(id) else {
            return false;
        };
        cell.pos = cell.pos.offset(dx, dy);
        if !with_children {
            return true;
        }

        // Each child moves once, however often it is listed.
        let children: IndexSet<String> = cell.children.iter().cloned().collect();
        for child in children.iter().filter(|child| child.as_str() != id) {
            if let Some(child) = self.cells.get_mut(child) {
                child.pos = child.pos.offset(dx, dy);
            }
        }
        true
    }

    /// Removes every cell lying entirely inside `rect` and returns their ids.
    /// Parent/child links play no part: a child outside `rect` survives its parent.
    pub fn delete_contained(&mut self, rect: GridRect) -> Vec<String> {
        let doomed: Vec<String> = self
            .cells
            .iter()
            .filter(|(_, cell)| rect.contains_rect(&cell.bounds()))
            .map(|(id, _)| id.clone())
            .collect();
        for id in &doomed {
            self.cells.shift_remove(id);
        }
        doomed
    }

    /// First wordlist identifier not already used by a cell.
    pub fn next_id(&self) -> String {
        ident::allocate(|candidate| self.contains(candidate))
    }

    fn pick_at(&self, point: GridPoint, better: impl Fn(i64, i64) -> bool) -> Option<&str> {
        let mut best: Option<(&str, i64)> = None;
        for (id, cell) in &self.cells {
            if !cell.contains(point) {
                continue;
            }
            let area = cell.size.area();
            match best {
                Some((_, best_area)) if !better(area, best_area) => {}
                _ => best = Some((id.as_str(), area)),
            }
        }
        best.map(|(id, _)| id)
    }
}
