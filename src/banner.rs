/// Key bindings understood by the renderer window.
pub const CONTROLS: &str = "\
press \"WASD\" to move, hold right click to rotate camera,
\"space\" to travel up vertically,
\"left shift\" to travel down vertically, scroll wheel to zoom
IJKL to move light, U and O to move light up and down vertically

esc to quit kanirenderer.";

pub fn print_controls() {
    println!("Loading...");
    println!();
    println!("{}", CONTROLS);
    println!();
}
