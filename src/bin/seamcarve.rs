use seamcarve::imageio::{load_rgb, save};
use seamcarve::{compute_energy, energy_to_image, parse_target, seamcarve, CarveError};
use std::process;

extern crate clap;

use clap::{App, Arg, ArgMatches};
use log::{info, warn};

// The only energy function there is.  The mode argument is accepted so
// existing callers keep working, but it never changes the result.
const KNOWN_ENERGY_MODES: [&str; 2] = ["forward", "gradient"];

// Required and defaulted arguments are always present once clap is done.
fn arg<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches.value_of(name).unwrap_or_default()
}

fn run(matches: &ArgMatches) -> Result<(), CarveError> {
    let (width, height) = parse_target(arg(matches, "width"), arg(matches, "height"))?;

    let mode = arg(matches, "energy_mode");
    if KNOWN_ENERGY_MODES.contains(&mode) {
        info!("energy mode '{}': using gradient energy", mode);
    } else {
        warn!("unknown energy mode '{}'; using gradient energy", mode);
    }

    let image = load_rgb(arg(matches, "input"))?;
    let carved = seamcarve(&image, width, height)?;
    save(&carved, arg(matches, "output"))?;

    // Only once the carved image is safely on disk.
    if let Some(path) = matches.value_of("energy_map") {
        save(&energy_to_image(&compute_energy(&image)), path)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to resize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the resized image; the extension picks the format")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .help("Target width in pixels")
                .required(true)
                .allow_hyphen_values(true)
                .index(3),
        )
        .arg(
            Arg::with_name("height")
                .help("Target height in pixels")
                .required(true)
                .allow_hyphen_values(true)
                .index(4),
        )
        .arg(
            Arg::with_name("energy_mode")
                .help("Energy function; accepted for compatibility, gradient energy is always used")
                .default_value("forward")
                .index(5),
        )
        .arg(
            Arg::with_name("energy_map")
                .long("energy-map")
                .value_name("FILE")
                .help("Also write the source image's energy map as a greyscale image")
                .takes_value(true),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
