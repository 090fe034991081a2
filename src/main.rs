/*

    Project the bounds of scene objects onto the screen
    and report their bounding rectangles.

    @date: Oct, 2025
    @author: Bartu

*/

use std::{self, env};
use tracing::{info, warn, error, debug};
use tracing_subscriber;

use screen_rect::json_parser::parse_projection_json;
use screen_rect::projection::project_objects;

fn main()  -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let json_path: &String = if args.len() == 1 {
        warn!("No arguments were provided, setting default job path...");
        &String::from("./inputs/projection.json")
    } else if args.len() == 2 {
        &args[1]
    } else {
        error!("Usage: {} <filename>.json", args[0]);
        std::process::exit(1);
    };

    // Parse JSON
    info!("Loading projection job from {}...", json_path);
    let root = parse_projection_json(json_path).map_err(|e| {
        error!("Failed to load job: {}", e);
        e
    })?;
    debug!("Job is loaded successfully.\n {:#?}", root);

    let report = project_objects(&root.job);

    for obj in report.objects.iter() {
        let status = if obj.fully_inside { "inside" } else if obj.visible { "partial" } else { "culled" };
        println!("object {:>4}  {:<8} {}", obj._id, status, obj.rect);
    }
    if report.visible().next().is_some() {
        println!("visible union  {}", report.visible_union);
    }
    for (a, b) in report.overlapping_pairs() {
        println!("overlap        {} <-> {}", a, b);
    }

    info!("Finished execution.");
    Ok(())
}
