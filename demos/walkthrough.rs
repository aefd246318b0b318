//! Rendering Mode Walkthrough
//!
//! Runs the same three steps in every render mode, in real time:
//! select the mode, reload the site, then open the About page.
//!
//! Run with: RUST_LOG=rendersim=debug cargo run --example walkthrough --features runtime

use rendersim::content::{BuiltinContent, Viewport};
use rendersim::core::{PageId, RenderMode};
use rendersim::driver::RealtimeDriver;
use rendersim::engine::Simulation;
use rendersim::profile::ModeTraits;
use tokio::time::Instant;

fn describe(viewport: &Viewport) -> String {
    match viewport {
        Viewport::Blank => "(blank)".to_string(),
        Viewport::ClientRenderSpinner => "building page in the browser...".to_string(),
        Viewport::FetchingIndicator => "fetching data...".to_string(),
        Viewport::Content(content) => format!("[{}]", content.title),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Rendering Mode Walkthrough ===\n");

    let mut driver = RealtimeDriver::new(Simulation::new());

    for mode in RenderMode::ALL {
        let traits = ModeTraits::of(mode);
        println!("{} ({})", mode, mode.title());
        println!(
            "  first load: {} | navigation: {} | SEO: {} | server load: {}",
            traits.first_load, traits.navigation, traits.seo, traits.server_load
        );

        driver.select_mode(mode);

        let started = Instant::now();
        let snapshot = driver.reload();
        println!("  reload      -> {}", describe(&Viewport::resolve(&snapshot, &BuiltinContent)));
        let snapshot = driver.settle().await;
        println!(
            "  after {:>4}ms -> {}",
            started.elapsed().as_millis(),
            describe(&Viewport::resolve(&snapshot, &BuiltinContent))
        );

        let started = Instant::now();
        let snapshot = driver.navigate_to(PageId::About);
        println!(
            "  navigate    -> {} (address: /{})",
            describe(&Viewport::resolve(&snapshot, &BuiltinContent)),
            snapshot.page
        );
        let snapshot = driver.settle().await;
        println!(
            "  after {:>4}ms -> {}\n",
            started.elapsed().as_millis(),
            describe(&Viewport::resolve(&snapshot, &BuiltinContent))
        );
    }

    let history = driver.simulation().history();
    println!("Recorded {} phase transitions", history.len());

    println!("\n=== Walkthrough Complete ===");
}
