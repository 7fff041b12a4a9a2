//! Startup banner with gradient (ATS CHECK).

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Brand indigo (#4f46e5).
const BRAND_INDIGO: (u8, u8, u8) = (0x4f, 0x46, 0xe5);
/// Brand sky (#38bdf8).
const BRAND_SKY: (u8, u8, u8) = (0x38, 0xbd, 0xf8);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the welcome banner: "ATS CHECK" in figlet with an indigo-to-sky
/// gradient, then version and tagline.
pub fn print_welcome() {
    let mut out = stdout();
    let font = FIGfont::standard().expect("embedded figlet font");
    let figure = font.convert("ATS CHECK").expect("figlet convert ATS CHECK");
    let art = figure.to_string();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(BRAND_INDIGO, BRAND_SKY, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: BRAND_SKY.0,
        g: BRAND_SKY.1,
        b: BRAND_SKY.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("Is your resume ATS ready?\r\n\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
