use dreamscape_nav::guidance::GuidanceEvent;
use dreamscape_nav::location::{LocationService, SimulatedPositionSource};
use dreamscape_nav::planner::HomeState;
use dreamscape_nav::utils::distance::{format_feet, meters_to_miles};
use dreamscape_nav::{
    Coordinate, MockCatalogGenerator, NavError, NavigationSessionStore, NavigatorConfig,
    Result, RoutePlanner,
};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dreamscape_nav=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = if args.len() > 1 {
        let path = Path::new(&args[1]);
        info!("Loading configuration from {:?}", path);
        NavigatorConfig::load(path)?
    } else if Path::new("dreamscape.toml").exists() {
        info!("Loading configuration from dreamscape.toml");
        NavigatorConfig::load(Path::new("dreamscape.toml"))?
    } else {
        info!("Using default configuration");
        NavigatorConfig::default()
    };

    let store = NavigationSessionStore::new();
    let planner = RoutePlanner::new(
        store.clone(),
        Arc::new(MockCatalogGenerator::new()),
        config.clone(),
    );

    // Home
    let here = Coordinate::new(37.7749, -122.4194).with_name("Current location");
    let location = LocationService::new(
        SimulatedPositionSource::granted(here),
        config.location.distance_interval_m,
    );
    match planner.locate(&location) {
        HomeState::Ready { origin, .. } => println!("You are at {}", origin),
        HomeState::LocationRequired => {
            println!("Location Access Required: open Settings to continue");
            return Err(NavError::PermissionDenied);
        }
    }
    let destination = Coordinate::new(37.7955, -122.3937).with_name("Ferry Building");
    let crow_flies = planner
        .store()
        .origin()
        .map(|o| meters_to_miles(o.distance_to(&destination)))
        .unwrap_or(0.0);
    println!(
        "Destination: {} ({:.1} mi as the crow flies)",
        destination.name.as_deref().unwrap_or("Mock Destination"),
        crow_flies
    );
    store.set_destination(Some(destination));

    // Route selection
    println!("Calculating routes...");
    std::thread::sleep(config.planning.calculating_delay());
    let options = planner.plan_routes();
    for route in &options.routes {
        let badge = if route.is_recommended(config.planning.recommend_threshold) {
            "  [Recommended]"
        } else {
            ""
        };
        let traffic_marker = if route.traffic.is_heavy() { "!" } else { "" };
        println!(
            "  {}  {}% confidence, {} traffic{}{}",
            route.summary(),
            route.ai_confidence,
            route.traffic,
            traffic_marker,
            badge
        );
    }

    let selected = match planner.confirm(&options) {
        Some(route) => route,
        None => {
            println!("No route selected");
            return Ok(());
        }
    };
    println!("Starting navigation on {}", selected.name);

    // Navigation
    let mut guidance = match planner.begin_guidance() {
        Some(g) => g,
        None => {
            println!("No active route");
            return Ok(());
        }
    };
    let started = chrono::Utc::now();
    if let Some(arrival) = guidance.arrival_time(started) {
        println!("Arriving around {}", arrival.format("%H:%M"));
    }
    println!(
        "{} ({})",
        guidance.current_instruction().text,
        format_feet(guidance.current_instruction().distance)
    );

    let tick = Duration::from_millis(config.guidance.instruction_interval_ms);
    while !guidance.is_complete() {
        for event in guidance.advance_by(tick) {
            match event {
                GuidanceEvent::InstructionAdvanced { .. } => {
                    let step = guidance.current_instruction();
                    println!("{} ({})", step.text, format_feet(step.distance));
                }
                GuidanceEvent::ProgressComplete => println!("Progress 100%"),
            }
        }
    }
    println!("{}", guidance.stats());

    let mut out = std::io::stdout();
    writeln!(out, "Session while navigating:")?;
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&store.snapshot())?
    )?;

    planner.end_navigation();
    writeln!(
        out,
        "Back home: navigating={}, routes={}",
        store.is_navigating(),
        store.available_routes().len()
    )?;

    Ok(())
}
