/// CSS selector of the canvas the renderer binds to.
pub const CANVAS_SELECTOR: &str = "#product-canvas";

/// Element whose opacity fades out as the page scrolls.
pub const HERO_SELECTOR: &str = ".hero";

/// Model loaded when the manifest does not name one.
pub const DEFAULT_MODEL_PATH: &str = "models/scene.gltf";

/// Runtime manifest, relative to the asset root.
pub const VIEWER_MANIFEST_PATH: &str = "viewer.json";

/// Document height of the native development page, in viewport heights.
pub const VIRTUAL_PAGE_SCREENS: f32 = 5.0;

/// Pixels scrolled per mouse wheel line on the native development page.
pub const VIRTUAL_PAGE_LINE_HEIGHT: f32 = 40.0;
