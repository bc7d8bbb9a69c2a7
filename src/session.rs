use tracing::{debug, info};

use crate::document::Document;
use crate::error::Result;
use crate::geometry::{Axis, MirrorPlane};
use crate::operations::projection::ProjectionResult;
use crate::solid::{FrustumParams, SolidModel};

/// Command entry point bound to whichever document the caller passes in.
///
/// Every command first checks that the document is reachable, then builds
/// the frustum if there is none yet or if the document differs from the one
/// the current solid was built in.
#[derive(Debug, Default)]
pub struct Session {
    params: FrustumParams,
    solid: Option<SolidModel>,
}

impl Session {
    /// Creates a session that builds default-sized frustums.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that builds frustums with `params`.
    #[must_use]
    pub fn with_params(params: FrustumParams) -> Self {
        Self {
            params,
            solid: None,
        }
    }

    /// Dimensions used when a solid is built.
    #[must_use]
    pub fn params(&self) -> &FrustumParams {
        &self.params
    }

    /// The current solid, if one has been built.
    #[must_use]
    pub fn solid(&self) -> Option<&SolidModel> {
        self.solid.as_ref()
    }

    /// Returns the solid for `doc`, building it first if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unavailable or the frustum
    /// cannot be drawn.
    pub fn attach<D: Document + ?Sized>(&mut self, doc: &mut D) -> Result<&mut SolidModel> {
        doc.check_available()?;
        let id = doc.id();
        let solid = match self.solid.take() {
            Some(solid) if solid.document() == id => solid,
            previous => match SolidModel::initialize(doc, &self.params) {
                Ok(solid) => {
                    if let Some(previous) = previous {
                        info!(from = ?previous.document(), to = ?id, "document changed, solid rebuilt");
                    }
                    solid
                }
                Err(err) => {
                    self.solid = previous;
                    return Err(err);
                }
            },
        };
        Ok(self.solid.insert(solid))
    }

    /// Translates the solid by `(dx, dy, dz)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unavailable or rejects a command.
    pub fn move_by<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        dx: f64,
        dy: f64,
        dz: f64,
    ) -> Result<()> {
        debug!(dx, dy, dz, "move");
        self.attach(doc)?.move_by(doc, dx, dy, dz)
    }

    /// Mirrors the solid across a coordinate plane.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unavailable or rejects a command.
    pub fn mirror<D: Document + ?Sized>(&mut self, doc: &mut D, plane: MirrorPlane) -> Result<()> {
        debug!(?plane, "mirror");
        self.attach(doc)?.mirror(doc, plane)
    }

    /// Scales the solid about its center.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unavailable or rejects a command.
    pub fn scale<D: Document + ?Sized>(&mut self, doc: &mut D, factor: f64) -> Result<()> {
        debug!(factor, "scale");
        self.attach(doc)?.scale(doc, factor)
    }

    /// Rotates the solid about a coordinate axis by `angle` radians.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unavailable or rejects a command.
    pub fn rotate<D: Document + ?Sized>(&mut self, doc: &mut D, axis: Axis, angle: f64) -> Result<()> {
        debug!(?axis, angle, "rotate");
        self.attach(doc)?.rotate(doc, axis, angle)
    }

    /// Draws the orthographic front view.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unavailable or rejects a command.
    pub fn front_view<D: Document + ?Sized>(&mut self, doc: &mut D) -> Result<ProjectionResult> {
        debug!("front view");
        self.attach(doc)?.front_view(doc)
    }

    /// Draws the perspective view from `(cx, cy, cz)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex is coplanar with the viewpoint, or if
    /// the document is unavailable or rejects a command.
    pub fn central_view<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        cx: f64,
        cy: f64,
        cz: f64,
    ) -> Result<ProjectionResult> {
        debug!(cx, cy, cz, "central view");
        self.attach(doc)?.central_view(doc, cx, cy, cz)
    }

    /// Draws the cavalier oblique view at `angle_deg` degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unavailable or rejects a command.
    pub fn oblique_view<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        angle_deg: f64,
    ) -> Result<ProjectionResult> {
        debug!(angle_deg, "oblique view");
        self.attach(doc)?.oblique_view(doc, angle_deg)
    }
}
