// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bottom sheet basics.
//!
//! Present a sheet, drag it up to `full`, back down to `half`, then flick it
//! out of view, ticking a pretend 60 Hz clock in between.
//!
//! Run:
//! - `cargo run -p surf_demos --example sheet_basics`
//! - `RUST_LOG=surf_sheet=trace cargo run -p surf_demos --example sheet_basics`

use surf_demos::{SheetLog, init_tracing};
use surf_sheet::{
    DragDirection, SheetConfig, SheetController, SheetGesture, SheetMetrics, SheetPhase,
};
use tracing::info;

const FRAME_MS: u64 = 16;

fn settle(sheet: &mut SheetController, now: &mut u64, host: &mut SheetLog) {
    while sheet.tick(*now, host) {
        *now += FRAME_MS;
    }
}

fn drag(sheet: &mut SheetController, dy: f64, now: &mut u64, host: &mut SheetLog) {
    sheet.handle_gesture(SheetGesture::Began, *now, host);
    for step in 1..=4 {
        *now += FRAME_MS;
        let translation_y = dy * f64::from(step) / 4.0;
        sheet.handle_gesture(SheetGesture::Changed { translation_y }, *now, host);
    }
    *now += FRAME_MS;
    sheet.handle_gesture(
        SheetGesture::Ended {
            translation_y: dy,
            direction: DragDirection::from_translation(dy),
        },
        *now,
        host,
    );
}

fn main() -> Result<(), surf_sheet::SheetError> {
    init_tracing();

    let mut host = SheetLog::default();
    let mut sheet = SheetController::new(SheetConfig::default(), SheetMetrics::new(844.0, 44.0))?;
    let mut now = 0;

    sheet.present(now, &mut host);
    settle(&mut sheet, &mut now, &mut host);
    info!(state = ?sheet.state(), "presented");

    for dy in [-200.0, 180.0, 300.0] {
        drag(&mut sheet, dy, &mut now, &mut host);
        settle(&mut sheet, &mut now, &mut host);
        info!(dy, state = ?sheet.state(), phase = ?sheet.phase(), "drag finished");
    }

    // Further input is ignored once dismissed.
    drag(&mut sheet, -400.0, &mut now, &mut host);
    assert_eq!(sheet.phase(), SheetPhase::Dismissed);
    assert!(host.dismissed);

    sheet.present(now, &mut host);
    settle(&mut sheet, &mut now, &mut host);
    info!(state = ?sheet.state(), "presented again");
    Ok(())
}
