mod make_frustum;

pub use make_frustum::MakeFrustum;
