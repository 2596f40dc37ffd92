//! Headless model of the game board: a tool bar with one selected [Tool], a [TerrainGrid] that
//! is painted by clicking cells, and the start and end markers handed to the solver on play.

use crate::{find_path, Coordinate, Playback, TerrainGrid, TerrainKind, DEFAULT_GRID_SIZE};
use core::fmt;
use log::{debug, info};

/// What a click on an unpainted cell does. Every tool except [Tool::None] is used once, after
/// which the selection falls back to [Tool::None].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    #[default]
    None,
    StartPoint,
    EndPoint,
    Grassland,
    Swampland,
    Obstacle,
}

impl Tool {
    /// The terrain painted by this tool, if it paints any.
    pub fn terrain(self) -> Option<TerrainKind> {
        match self {
            Tool::Grassland => Some(TerrainKind::Grassland),
            Tool::Swampland => Some(TerrainKind::Swampland),
            Tool::Obstacle => Some(TerrainKind::Obstacle),
            Tool::None | Tool::StartPoint | Tool::EndPoint => None,
        }
    }
}

/// Effect of a single [GridEditor::click].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No tool was selected and the cell was empty.
    Ignored,
    /// The cell was painted or marked and has been reset to open terrain.
    Cleared,
    MarkedStart,
    MarkedEnd,
    Painted(TerrainKind),
}

/// Owns the board being edited. At most one cell is marked as start and one as end at any time.
#[derive(Clone, Debug)]
pub struct GridEditor {
    grid: TerrainGrid,
    tool: Tool,
    start: Option<Coordinate>,
    end: Option<Coordinate>,
}

impl Default for GridEditor {
    fn default() -> GridEditor {
        GridEditor::new(DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE)
    }
}

impl GridEditor {
    pub fn new(width: usize, height: usize) -> GridEditor {
        GridEditor::from_grid(TerrainGrid::new(width, height))
    }

    /// Starts editing an existing grid, without any markers placed.
    pub fn from_grid(grid: TerrainGrid) -> GridEditor {
        GridEditor {
            grid,
            tool: Tool::None,
            start: None,
            end: None,
        }
    }

    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn selected_tool(&self) -> Tool {
        self.tool
    }

    pub fn start(&self) -> Option<Coordinate> {
        self.start
    }

    pub fn end(&self) -> Option<Coordinate> {
        self.end
    }

    /// A path can be searched once both markers are placed.
    pub fn can_play(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    fn is_filled(&self, coord: Coordinate) -> bool {
        self.grid.kind_of(coord) != TerrainKind::Open
            || self.start == Some(coord)
            || self.end == Some(coord)
    }

    /// Applies the selected tool to `coord`. Clicking a painted or marked cell clears it
    /// instead, whatever the selection. Panics if `coord` is outside of the grid.
    pub fn click(&mut self, coord: Coordinate) -> ClickOutcome {
        if self.is_filled(coord) {
            if self.start == Some(coord) {
                self.start = None;
            } else if self.end == Some(coord) {
                self.end = None;
            }
            self.grid.set(coord, TerrainKind::Open);
            debug!("Cleared {}", coord);
            return ClickOutcome::Cleared;
        }
        let outcome = match self.tool {
            Tool::None => return ClickOutcome::Ignored,
            Tool::StartPoint => {
                self.start = Some(coord);
                ClickOutcome::MarkedStart
            }
            Tool::EndPoint => {
                self.end = Some(coord);
                ClickOutcome::MarkedEnd
            }
            Tool::Grassland => self.paint(coord, TerrainKind::Grassland),
            Tool::Swampland => self.paint(coord, TerrainKind::Swampland),
            Tool::Obstacle => self.paint(coord, TerrainKind::Obstacle),
        };
        debug!("{:?} applied to {}", self.tool, coord);
        self.tool = Tool::None;
        outcome
    }

    fn paint(&mut self, coord: Coordinate, kind: TerrainKind) -> ClickOutcome {
        self.grid.set(coord, kind);
        ClickOutcome::Painted(kind)
    }

    /// Searches a path between the markers and wraps it for playback. [None] while a marker is
    /// missing; an empty [Playback] if the end cannot be reached.
    pub fn play(&mut self) -> Option<Playback> {
        let (start, end) = self.start.zip(self.end)?;
        self.grid.update();
        let path = find_path(&self.grid, start, end);
        if path.is_empty() {
            info!("No path found from {} to {}", start, end);
        }
        Some(Playback::with_default_interval(path))
    }
}

/// Renders the board in the ASCII map format with the start drawn as `S` and the end as `E`.
impl fmt::Display for GridEditor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.grid.height() {
            let line = (0..self.grid.width())
                .map(|col| {
                    let coord = Coordinate::new(row, col);
                    if self.start == Some(coord) {
                        'S'
                    } else if self.end == Some(coord) {
                        'E'
                    } else {
                        self.grid.kind_of(coord).glyph()
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click_with(editor: &mut GridEditor, tool: Tool, coord: Coordinate) -> ClickOutcome {
        editor.select_tool(tool);
        editor.click(coord)
    }

    #[test]
    fn tools_are_used_once() {
        let mut editor = GridEditor::new(4, 4);
        let c = Coordinate::new(1, 2);
        assert_eq!(
            click_with(&mut editor, Tool::Swampland, c),
            ClickOutcome::Painted(TerrainKind::Swampland)
        );
        assert_eq!(editor.grid().kind_of(c), TerrainKind::Swampland);
        assert_eq!(editor.selected_tool(), Tool::None);
        assert_eq!(editor.click(Coordinate::new(0, 0)), ClickOutcome::Ignored);
    }

    #[test]
    fn painting_tools_paint_their_terrain() {
        let mut editor = GridEditor::new(3, 1);
        for (col, tool) in [Tool::Grassland, Tool::Swampland, Tool::Obstacle]
            .into_iter()
            .enumerate()
        {
            let c = Coordinate::new(0, col);
            let kind = tool.terrain().unwrap();
            assert_eq!(click_with(&mut editor, tool, c), ClickOutcome::Painted(kind));
            assert_eq!(editor.grid().kind_of(c), kind);
        }
        assert_eq!(editor.grid().to_string(), "gs#\n");
    }

    #[test]
    fn clicking_a_filled_cell_clears_it() {
        let mut editor = GridEditor::new(4, 4);
        let c = Coordinate::new(3, 3);
        click_with(&mut editor, Tool::Obstacle, c);
        // The selected tool is not applied to a filled cell
        assert_eq!(click_with(&mut editor, Tool::Grassland, c), ClickOutcome::Cleared);
        assert_eq!(editor.grid().kind_of(c), TerrainKind::Open);
        assert_eq!(editor.selected_tool(), Tool::Grassland);
    }

    #[test]
    fn single_start_and_end() {
        let mut editor = GridEditor::default();
        assert_eq!(editor.grid().width(), DEFAULT_GRID_SIZE);
        let first = Coordinate::new(0, 0);
        let second = Coordinate::new(5, 5);
        assert_eq!(click_with(&mut editor, Tool::StartPoint, first), ClickOutcome::MarkedStart);
        assert_eq!(click_with(&mut editor, Tool::StartPoint, second), ClickOutcome::MarkedStart);
        assert_eq!(editor.start(), Some(second));
        assert!(!editor.can_play());
        assert!(editor.play().is_none());

        let end = Coordinate::new(15, 15);
        assert_eq!(click_with(&mut editor, Tool::EndPoint, end), ClickOutcome::MarkedEnd);
        assert!(editor.can_play());

        // Clearing the start marker disables play again
        assert_eq!(editor.click(second), ClickOutcome::Cleared);
        assert_eq!(editor.start(), None);
        assert_eq!(editor.end(), Some(end));
        assert!(!editor.can_play());
    }

    #[test]
    fn markers_are_not_placed_on_painted_cells() {
        let mut editor = GridEditor::new(3, 3);
        let c = Coordinate::new(1, 1);
        click_with(&mut editor, Tool::Grassland, c);
        assert_eq!(click_with(&mut editor, Tool::StartPoint, c), ClickOutcome::Cleared);
        assert_eq!(editor.start(), None);
        assert_eq!(click_with(&mut editor, Tool::StartPoint, c), ClickOutcome::MarkedStart);
        assert_eq!(editor.grid().kind_of(c), TerrainKind::Open);
    }

    #[test]
    fn play_finds_a_path_around_a_wall() {
        let mut editor = GridEditor::new(3, 3);
        for row in 0..2 {
            click_with(&mut editor, Tool::Obstacle, Coordinate::new(row, 1));
        }
        click_with(&mut editor, Tool::StartPoint, Coordinate::new(0, 0));
        click_with(&mut editor, Tool::EndPoint, Coordinate::new(0, 2));
        let playback = editor.play().unwrap();
        assert_eq!(playback.len(), 7);
        assert_eq!(playback.path().last(), Some(&Coordinate::new(0, 2)));
        assert_eq!(editor.to_string(), "S#E\n.#.\n...\n");

        // Closing the gap leaves nothing to play
        click_with(&mut editor, Tool::Obstacle, Coordinate::new(2, 1));
        let playback = editor.play().unwrap();
        assert!(playback.is_empty());
    }
}
