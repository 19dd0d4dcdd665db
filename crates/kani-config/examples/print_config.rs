/// Example program to print the effective launcher configuration
///
/// Run with: cargo run -p kani-config --example print_config

fn main() {
    let config = match kani_config::LauncherConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("=== Kani Launcher Configuration ===\n");

    println!("Renderer Settings:");
    println!("  Library: {:?}", config.renderer.library);
    println!();

    println!("Launch Settings:");
    println!("  Thread: {}", config.launch.thread);
    println!("  Banner: {}", config.launch.banner);
    println!();

    println!("Logging Settings:");
    println!("  Filter: {}", config.logging.filter);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
