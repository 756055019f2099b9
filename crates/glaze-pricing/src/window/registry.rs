//! Fixed mapping from layouts and type keys to calculators.

use super::spec::WindowSelection;
use super::types::{PartitionStyle, WindowType};
use crate::calc::{
    Calculator, CurtainWall, FixedLights, Folding, OpenableTop, Projected, ProjectedKind, Sliding,
};
use crate::error::PricingError;

/// Layouts a shopper can pick by panel count and partition style.
///
/// Types 13 to 16 and 19 are single-frame products and only selectable by
/// explicit key.
const LAYOUTS: &[(u8, PartitionStyle, WindowType)] = &[
    (2, PartitionStyle::NoPartition, WindowType::Type1),
    (2, PartitionStyle::FixedBottom, WindowType::Type2),
    (2, PartitionStyle::FixedTop, WindowType::Type2),
    (2, PartitionStyle::DoubleFixed, WindowType::Type3),
    (3, PartitionStyle::NoPartition, WindowType::Type4),
    (3, PartitionStyle::FixedBottom, WindowType::Type5),
    (3, PartitionStyle::FixedTop, WindowType::Type5),
    (3, PartitionStyle::DoubleFixed, WindowType::Type6),
    (4, PartitionStyle::NoPartition, WindowType::Type7),
    (4, PartitionStyle::FixedBottom, WindowType::Type8),
    (4, PartitionStyle::FixedTop, WindowType::Type8),
    (4, PartitionStyle::DoubleFixed, WindowType::Type9),
    (2, PartitionStyle::OpenAbleTopFxBtm, WindowType::Type10),
    (3, PartitionStyle::OpenAbleTopFxBtm, WindowType::Type11),
    (4, PartitionStyle::OpenAbleTopFxBtm, WindowType::Type12),
    (3, PartitionStyle::Folding, WindowType::Type17),
    (4, PartitionStyle::Folding, WindowType::Type18),
];

/// Lookup key for a layout (e.g., "3-fixedTop").
pub fn layout_key(panel_count: u8, partition_style: &str) -> String {
    format!("{}-{}", panel_count, partition_style)
}

/// Resolve a layout, failing if it is not offered.
pub fn resolve_strict(panel_count: u8, partition_style: &str) -> Result<WindowType, PricingError> {
    PartitionStyle::parse(partition_style)
        .and_then(|style| {
            LAYOUTS
                .iter()
                .find(|(n, s, _)| *n == panel_count && *s == style)
                .map(|(_, _, t)| *t)
        })
        .ok_or_else(|| PricingError::UnsupportedConfiguration {
            panel_count,
            partition_style: partition_style.to_string(),
        })
}

/// Resolve a layout, substituting `default` if it is not offered.
pub fn resolve_with_default(
    panel_count: u8,
    partition_style: &str,
    default: WindowType,
) -> WindowType {
    resolve_strict(panel_count, partition_style).unwrap_or_else(|_| {
        tracing::debug!(
            key = %layout_key(panel_count, partition_style),
            default = %default,
            "layout not offered, using default type"
        );
        default
    })
}

/// Resolve a shopper selection strictly.
pub fn resolve(selection: &WindowSelection) -> Result<WindowType, PricingError> {
    match selection {
        WindowSelection::Type { window_type } => Ok(*window_type),
        WindowSelection::Layout {
            panel_count,
            partition_style,
        } => resolve_strict(*panel_count, partition_style),
    }
}

/// Layout keys that resolve to a type.
pub fn layouts_for(window_type: WindowType) -> Vec<String> {
    LAYOUTS
        .iter()
        .filter(|(_, _, t)| *t == window_type)
        .map(|(n, s, _)| layout_key(*n, s.as_str()))
        .collect()
}

/// The calculator registered for a type.
pub fn calculator(window_type: WindowType) -> Calculator {
    use WindowType::*;

    let sliding = |panels, lights| {
        Calculator::Sliding(Sliding {
            window_type,
            panels,
            lights,
        })
    };
    let openable = |vents| Calculator::OpenableTop(OpenableTop { window_type, vents });
    let projected = |kind| Calculator::Projected(Projected { window_type, kind });
    let folding = |panels| Calculator::Folding(Folding {
        window_type,
        panels,
    });

    match window_type {
        Type1 => sliding(2, FixedLights::None),
        Type2 => sliding(2, FixedLights::Single),
        Type3 => sliding(2, FixedLights::Double),
        Type4 => sliding(3, FixedLights::None),
        Type5 => sliding(3, FixedLights::Single),
        Type6 => sliding(3, FixedLights::Double),
        Type7 => sliding(4, FixedLights::None),
        Type8 => sliding(4, FixedLights::Single),
        Type9 => sliding(4, FixedLights::Double),
        Type10 => openable(2),
        Type11 => openable(3),
        Type12 => openable(4),
        Type13 => projected(ProjectedKind::TopHung),
        Type14 => projected(ProjectedKind::CentreHung),
        Type15 => projected(ProjectedKind::ProjectingLight),
        Type16 => projected(ProjectedKind::AwningTop),
        Type17 => folding(3),
        Type18 => folding(4),
        Type19 => Calculator::CurtainWall(CurtainWall { window_type }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::WindowCalculator;

    #[test]
    fn test_resolve_strict() {
        assert_eq!(resolve_strict(3, "noPartition"), Ok(WindowType::Type4));
        assert_eq!(resolve_strict(4, "openAbleTopFxBtm"), Ok(WindowType::Type12));
        assert_eq!(resolve_strict(4, "folding"), Ok(WindowType::Type18));
    }

    #[test]
    fn test_fixed_top_and_bottom_agree() {
        for n in 2..=4 {
            assert_eq!(resolve_strict(n, "fixedTop"), resolve_strict(n, "fixedBottom"));
        }
    }

    #[test]
    fn test_unsupported_layouts() {
        assert_eq!(
            resolve_strict(5, "noPartition"),
            Err(PricingError::UnsupportedConfiguration {
                panel_count: 5,
                partition_style: "noPartition".to_string(),
            })
        );
        assert!(resolve_strict(2, "folding").is_err());
        assert!(resolve_strict(3, "arched").is_err());
    }

    #[test]
    fn test_resolve_with_default() {
        assert_eq!(
            resolve_with_default(6, "noPartition", WindowType::Type1),
            WindowType::Type1
        );
        assert_eq!(
            resolve_with_default(2, "doubleFixed", WindowType::Type1),
            WindowType::Type3
        );
    }

    #[test]
    fn test_explicit_only_types() {
        for t in [
            WindowType::Type13,
            WindowType::Type14,
            WindowType::Type15,
            WindowType::Type16,
            WindowType::Type19,
        ] {
            assert!(layouts_for(t).is_empty());
        }
        assert_eq!(layouts_for(WindowType::Type5), vec!["3-fixedBottom", "3-fixedTop"]);
    }

    #[test]
    fn test_every_type_has_its_own_calculator() {
        for t in WindowType::ALL {
            assert_eq!(calculator(t).window_type(), t);
        }
    }
}
