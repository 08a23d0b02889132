// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Titled groups of tags and the bundled catalog.

use alloc::string::String;
use alloc::vec::Vec;

use crate::list::TagList;

/// How a section presents its tags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// A wrapping area that switches to two scrollable rows when it overflows.
    Adaptive,
    /// An endless horizontal strip.
    Loop,
}

/// A titled group of tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagSection {
    /// Identifier, unique within a catalog.
    pub id: u32,
    /// Presentation of the tags.
    pub kind: SectionKind,
    /// Description shown above the tags.
    pub title: String,
    /// The tags themselves.
    pub tags: TagList,
}

const TITLES: [&str; 11] = [
    "iOS",
    "Android",
    "DevOps",
    "Flutter",
    "PM",
    "Java",
    ".NET",
    "Ruby",
    "JavaScript",
    "C++",
    "React Native",
];

/// The two bundled sections, adaptive first, each holding the same eleven unselected tags.
#[must_use]
pub fn catalog() -> Vec<TagSection> {
    alloc::vec![
        TagSection {
            id: 0,
            kind: SectionKind::Adaptive,
            title: String::from(
                "Work on real tasks with an experienced mentor and get the chance to join the team.",
            ),
            tags: TagList::from_titles(TITLES),
        },
        TagSection {
            id: 1,
            kind: SectionKind::Loop,
            title: String::from(
                "Receive a stipend, keep a flexible schedule, and work on modern hardware.",
            ),
            tags: TagList::from_titles(TITLES),
        },
    ]
}
