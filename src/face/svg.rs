use std::fmt::{self, Write};

use crate::{ClockError, Result, services::TimeData, settings::Theme};

use super::{
    HandAngles,
    dial::{self, CENTER, VIEW_BOX},
};

/// Renders the analog clock face as a standalone SVG document.
///
/// The face is drawn in a 200x200 view box and sized to `200 * scale` pixels.
/// The theme is exposed as a `data-theme` attribute on the root element.
///
/// # Errors
/// Returns `ClockError::Render` if the document cannot be assembled.
pub fn render_face(time: &TimeData, scale: f64, theme: Theme) -> Result<String> {
    let mut svg = String::new();
    write_face(&mut svg, time, scale, theme).map_err(|e| ClockError::Render {
        surface: "svg".to_string(),
        details: e.to_string(),
    })?;
    Ok(svg)
}

fn write_face(out: &mut String, time: &TimeData, scale: f64, theme: Theme) -> fmt::Result {
    let size = VIEW_BOX * scale;
    let angles = HandAngles::from_time(time);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {VIEW_BOX} {VIEW_BOX}" width="{size}" height="{size}" class="clock-svg" data-theme="{}" aria-label="Clock showing {}:{:02}:{:02}">"#,
        theme.as_attribute(),
        time.hours,
        time.minutes,
        time.seconds
    )?;

    writeln!(
        out,
        r#"  <circle cx="{CENTER}" cy="{CENTER}" r="95" class="clock-face-outer"/>"#
    )?;
    writeln!(
        out,
        r#"  <circle cx="{CENTER}" cy="{CENTER}" r="88" class="clock-face-inner"/>"#
    )?;

    for tick in dial::hour_ticks() {
        write_tick(out, &tick, "hour-marker")?;
    }
    for tick in dial::minute_ticks() {
        write_tick(out, &tick, "minute-marker")?;
    }
    for numeral in dial::numerals() {
        writeln!(
            out,
            r#"  <text x="{:.3}" y="{:.3}" class="hour-number" dominant-baseline="central" text-anchor="middle">{}</text>"#,
            numeral.position.x, numeral.position.y, numeral.label
        )?;
    }

    write_hand(
        out,
        angles.hour,
        "hour-hand",
        (100.0, 55.0),
        "97,55 100,42 103,55",
    )?;
    write_hand(
        out,
        angles.minute,
        "minute-hand",
        (100.0, 35.0),
        "98,35 100,25 102,35",
    )?;

    writeln!(
        out,
        r#"  <g transform="rotate({}, {CENTER}, {CENTER})">"#,
        angles.second
    )?;
    writeln!(
        out,
        r#"    <line x1="100" y1="115" x2="100" y2="25" class="second-hand"/>"#
    )?;
    writeln!(
        out,
        r#"    <circle cx="100" cy="25" r="3" class="second-hand-tip"/>"#
    )?;
    writeln!(out, "  </g>")?;

    writeln!(
        out,
        r#"  <circle cx="{CENTER}" cy="{CENTER}" r="6" class="center-cap"/>"#
    )?;
    writeln!(
        out,
        r#"  <circle cx="{CENTER}" cy="{CENTER}" r="3" class="center-cap-inner"/>"#
    )?;

    for screw in dial::screws() {
        writeln!(
            out,
            r#"  <circle cx="{:.3}" cy="{:.3}" r="3" class="screw"/>"#,
            screw.x, screw.y
        )?;
        writeln!(
            out,
            r#"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" class="screw-slot"/>"#,
            screw.x - 2.0,
            screw.y,
            screw.x + 2.0,
            screw.y
        )?;
    }

    writeln!(out, "</svg>")
}

fn write_tick(out: &mut String, tick: &dial::Tick, class: &str) -> fmt::Result {
    writeln!(
        out,
        r#"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" class="{class}"/>"#,
        tick.inner.x, tick.inner.y, tick.outer.x, tick.outer.y
    )
}

fn write_hand(
    out: &mut String,
    angle: f64,
    class: &str,
    end: (f64, f64),
    tip: &str,
) -> fmt::Result {
    writeln!(
        out,
        r#"  <g transform="rotate({angle}, {CENTER}, {CENTER})">"#
    )?;
    writeln!(
        out,
        r#"    <line x1="{CENTER}" y1="{CENTER}" x2="{}" y2="{}" class="{class}"/>"#,
        end.0, end.1
    )?;
    writeln!(out, r#"    <polygon points="{tip}" class="{class}-tip"/>"#)?;
    writeln!(out, "  </g>")
}
