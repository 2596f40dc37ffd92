use terrain_pathfinding::{Coordinate, GridEditor, Tool};

// In this example the default 16x16 board is edited the way a player would: pick a tool, click
// a cell. A wall of obstacles with a single gap, a swamp in front of the gap and a patch of
// grassland are painted before the token is played from S to E.
//
// - # marks an obstacle
// - s marks swampland
// - g marks grassland
fn main() {
    let mut editor = GridEditor::default();
    for row in 0..14 {
        editor.select_tool(Tool::Obstacle);
        editor.click(Coordinate::new(row, 7));
    }
    for row in 10..16 {
        editor.select_tool(Tool::Swampland);
        editor.click(Coordinate::new(row, 6));
    }
    for col in 9..13 {
        editor.select_tool(Tool::Grassland);
        editor.click(Coordinate::new(2, col));
    }
    editor.select_tool(Tool::StartPoint);
    editor.click(Coordinate::new(1, 1));
    editor.select_tool(Tool::EndPoint);
    editor.click(Coordinate::new(1, 14));
    println!("{}", editor);

    let Some(playback) = editor.play() else {
        println!("Place both a start and an end point first.");
        return;
    };
    if playback.is_empty() {
        println!("No path found.");
        return;
    }
    println!("Path:");
    for (offset, coord) in playback.keyframes() {
        println!("{:>5.1}s {}", offset.as_secs_f32(), coord);
    }
}
