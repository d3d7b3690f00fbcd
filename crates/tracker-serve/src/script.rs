use rust_embed::RustEmbed;
use std::borrow::Cow;

pub const TRACKER_SCRIPT: &str = "tracker.js";

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Bytes of the bundled client script, if the asset is present.
pub fn tracker_script() -> Option<Cow<'static, [u8]>> {
    Assets::get(TRACKER_SCRIPT).map(|file| file.data)
}
