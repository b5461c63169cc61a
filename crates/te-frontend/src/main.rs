//! Gizmo replay entry point
//!
//! Usage: `te-replay <script.ron> [gizmo-config.ron]`

use te_frontend::{ReplayError, ReplayScript, run};
use te_renderer::GizmoConfig;

fn main() -> Result<(), ReplayError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "te_frontend=info,te_gizmo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let script_path = args
        .next()
        .ok_or_else(|| ReplayError::Usage("te-replay <script.ron> [gizmo-config.ron]".into()))?;
    let config = match args.next() {
        Some(path) => GizmoConfig::load(path)?,
        None => GizmoConfig::default(),
    };

    let script = ReplayScript::load(&script_path)?;
    tracing::info!(script = %script_path, frames = script.frames.len(), "Replaying gizmo input");

    for report in run(&script, config)? {
        let p = report.pose.position;
        let active = report.active.map_or("-", |h| h.name());
        println!(
            "{:>4}  {:<10}  ({:.4}, {:.4}, {:.4})",
            report.frame, active, p.x, p.y, p.z
        );
    }

    Ok(())
}
