//! Layer-4 branded splash screen - the last resort that never fails.

use std::path::Path;

/// Inline splash served when no splash asset is configured or the configured
/// file is unreadable. A branded screen beats a blank TV.
pub const INLINE_SPLASH: &str = r#"<!DOCTYPE html>
<html><head>
<meta charset="UTF-8">
<meta http-equiv="refresh" content="300">
<style>
  body { margin:0; background:#000; display:flex; align-items:center;
         justify-content:center; height:100vh; font-family:Inter,sans-serif; }
  .logo { text-align:center; color:#fff; }
  .logo h1 { font-size:72px; letter-spacing:4px; margin:0; }
  .logo p { font-size:18px; color:#888; margin-top:12px; }
</style>
</head><body>
<div class="logo">
  <h1>ARIZE</h1>
  <p>180 Fitness Club</p>
</div>
</body></html>"#;

/// Return the splash HTML, preferring the configured asset.
#[must_use]
pub fn splash_html(configured: Option<&Path>) -> String {
    configured
        .and_then(|path| std::fs::read_to_string(path).ok())
        .unwrap_or_else(|| INLINE_SPLASH.to_string())
}
