//! Drives a frustum through every command against an in-memory document.
//!
//! ```text
//! cargo run --example walkthrough
//! RUST_LOG=frustra=trace cargo run --example walkthrough
//! ```

use std::f64::consts::FRAC_PI_4;

use frustra::{Axis, DocumentId, FrustraError, MemoryDocument, MirrorPlane, Session};

fn main() -> Result<(), FrustraError> {
    // Default: WARN for everything, INFO for frustra.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("walkthrough=info".parse().unwrap_or_default())
        .add_directive("frustra=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut doc = MemoryDocument::new(DocumentId(1));
    let mut session = Session::new();

    session.move_by(&mut doc, 0.0, 0.0, 12.0)?;
    session.rotate(&mut doc, Axis::Z, FRAC_PI_4)?;
    session.scale(&mut doc, 1.5)?;
    session.mirror(&mut doc, MirrorPlane::Yoz)?;

    let front = session.front_view(&mut doc)?;
    tracing::info!(points = front.points().len(), "front view");

    let central = session.central_view(&mut doc, 0.0, 0.0, 40.0)?;
    tracing::info!(points = central.points().len(), "central view");

    let oblique = session.oblique_view(&mut doc, 45.0)?;
    tracing::info!(points = oblique.points().len(), "oblique view");

    if let Some(solid) = session.solid() {
        tracing::info!(center = ?solid.center(), faces = doc.face_count(), "done");
    }
    Ok(())
}
