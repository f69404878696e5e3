// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use shard_core::scene::NodeKind;

const HIDDEN_MARKERS: [&str; 3] = ["ground", "plane", "floor"];
const TINTABLE_MARKER: &str = "crystal";

/// Classifies a node by name, case-insensitively.
///
/// Names containing "ground", "plane" or "floor" are hidden. Otherwise names
/// containing "crystal" are tintable. Everything else passes through. Hidden
/// markers win over the tintable marker.
pub fn classify_name(name: &str) -> NodeKind {
    let lower = name.to_lowercase();
    if HIDDEN_MARKERS.iter().any(|m| lower.contains(m)) {
        NodeKind::Hidden
    } else if lower.contains(TINTABLE_MARKER) {
        NodeKind::Tintable
    } else {
        NodeKind::Passthrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_names() {
        assert_eq!(classify_name("Ground_01"), NodeKind::Hidden);
        assert_eq!(classify_name("backPlane"), NodeKind::Hidden);
        assert_eq!(classify_name("FLOOR"), NodeKind::Hidden);
    }

    #[test]
    fn test_tintable_names() {
        assert_eq!(classify_name("Crystal_Shard_07"), NodeKind::Tintable);
        assert_eq!(classify_name("bigcrystal"), NodeKind::Tintable);
    }

    #[test]
    fn test_hidden_wins_over_tintable() {
        assert_eq!(classify_name("crystal_floor"), NodeKind::Hidden);
    }

    #[test]
    fn test_other_names_pass_through() {
        assert_eq!(classify_name("Rock"), NodeKind::Passthrough);
        assert_eq!(classify_name(""), NodeKind::Passthrough);
    }
}
