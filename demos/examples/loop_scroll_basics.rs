// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loop strip basics.
//!
//! Build an endless chip strip from the bundled catalog, scroll it past both
//! ends, and toggle a chip the way the sheet's loop section does.
//!
//! Run:
//! - `cargo run -p surf_demos --example loop_scroll_basics`
//! - `RUST_LOG=debug cargo run -p surf_demos --example loop_scroll_basics`

use surf_demos::{ChipStrip, init_tracing};
use surf_loop_scroll::{LoopScrollConfig, LoopScrollEngine, LoopScrollError};
use surf_tags::{SectionKind, catalog};
use tracing::info;

const VIEWPORT: f64 = 390.0;

fn print_visible(engine: &mut LoopScrollEngine<surf_tags::Tag>, host: &mut ChipStrip) {
    let titles: Vec<String> = engine
        .realize(host)
        .into_iter()
        .map(|item| format!("{}@{:.0}", item.view.title, item.offset))
        .collect();
    info!(offset = engine.scroll_offset(), visible = ?titles);
}

fn main() -> Result<(), LoopScrollError> {
    init_tracing();

    let Some(section) = catalog().into_iter().find(|s| s.kind == SectionKind::Loop) else {
        return Ok(());
    };
    let mut tags = section.tags;
    let mut host = ChipStrip::default();
    let mut engine = LoopScrollEngine::new(
        tags.tags().to_vec(),
        LoopScrollConfig::default(),
        VIEWPORT,
        &mut host,
    )?;
    info!(
        items = engine.items().len(),
        padding = engine.padding(),
        insets = ?engine.section_insets(&host),
        "strip ready"
    );
    print_visible(&mut engine, &mut host);

    // Fling backwards past the leading edge; the engine re-centers.
    let content = engine.content_extent(&mut host);
    for offset in [300.0, 120.0, 0.0] {
        if let Some(jump) = engine.scroll_position_changed(offset, content, &mut host) {
            info!(from = offset, to = jump.offset, "host applies jump");
        }
        print_visible(&mut engine, &mut host);
    }
    engine.did_end_dragging(false, &mut host);

    // Tap the first visible chip, toggle it in the list, and reload in place.
    let first = engine.realize(&mut host).first().map(|item| item.padded);
    if let Some(logical) = first.and_then(|padded| engine.select(padded, &mut host)) {
        if tags.toggle(logical).is_ok() {
            let jump = engine.reload_in_place(tags.tags().to_vec(), &mut host)?;
            info!(revision = tags.revision(), offset = jump.offset, "reloaded");
        }
    }
    print_visible(&mut engine, &mut host);

    // A configuration change refreshes after a short delay.
    let now = 1_000;
    engine.update_configuration(LoopScrollConfig::default(), now)?;
    for t in [now, now + 5, now + 10] {
        if let Some(jump) = engine.tick(t, &mut host) {
            info!(t, offset = jump.offset, "deferred refresh");
        }
    }
    Ok(())
}
