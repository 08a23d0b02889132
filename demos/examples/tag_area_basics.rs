// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flexible tag area basics.
//!
//! Lay out the adaptive section at a few widths, showing when the wrapping
//! layout gives way to two scrolling rows, then select a chip.
//!
//! Run:
//! - `cargo run -p surf_demos --example tag_area_basics`

use surf_demos::{chip_size, init_tracing};
use surf_tags::{ChipMetrics, FlexibleArea, FlexibleAreaConfig, SectionKind, TagError, catalog};
use tracing::info;

fn main() -> Result<(), TagError> {
    init_tracing();

    let Some(section) = catalog()
        .into_iter()
        .find(|s| s.kind == SectionKind::Adaptive)
    else {
        return Ok(());
    };
    let metrics = ChipMetrics::default();
    let mut area = FlexibleArea::new(FlexibleAreaConfig::default(), section.tags);

    for width in [1200.0, 600.0, 390.0] {
        let sizes: Vec<_> = area
            .tags()
            .iter()
            .map(|tag| chip_size(tag.title(), &metrics))
            .collect();
        let (mode, layout) = area.layout(&sizes, width);
        info!(
            width,
            ?mode,
            content = ?layout.content_size,
            max_height = area.max_height(sizes[0].height),
            "tag area layout"
        );
    }

    let selected = area.select(4)?;
    let titles: Vec<&str> = area.tags().iter().map(|t| t.title()).collect();
    info!(selected, order = ?titles, "after selecting the fifth tag");
    Ok(())
}
