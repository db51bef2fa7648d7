// ── Dialect-specific parameter selection ──
//
// Each firmware family wants a different subset of the startCleaning
// knobs and rejects requests carrying keys it does not know. Pure
// function, unit-testable with no network anywhere near it.

use botvac_api::CleaningParams;

use crate::error::CoreError;
use crate::model::{
    ApiDialect, CleaningCategory, CleaningMode, CleaningPasses, NavigationMode, SpotSize,
};

/// Build the `startCleaning` parameters for the given dialect.
///
/// - `basic-1`: category, mode, modifier (+ spot dimensions)
/// - `micro-2`: category, navigationMode (mode and modifier dropped)
/// - `minimal-2`: category, modifier, navigationMode (mode dropped)
/// - `basic-2`: category, mode, modifier, navigationMode (+ spot dimensions)
///
/// A requested spot size is carried only by the dialects that take the
/// fields; the others clean a firmware-fixed spot and would reject the
/// keys. Any other dialect is refused outright — sending a guessed
/// shape would fail server-side with a far less useful error.
pub fn cleaning_params(
    dialect: &ApiDialect,
    category: CleaningCategory,
    mode: CleaningMode,
    passes: CleaningPasses,
    spot: Option<SpotSize>,
) -> Result<CleaningParams, CoreError> {
    let params = match dialect {
        ApiDialect::Basic1 => CleaningParams {
            category: category.code(),
            mode: Some(mode.code()),
            modifier: Some(passes.code()),
            navigation_mode: None,
            spot_width: spot.map(|s| s.width_cm),
            spot_height: spot.map(|s| s.height_cm),
        },
        ApiDialect::Micro2 => CleaningParams {
            category: category.code(),
            mode: None,
            modifier: None,
            navigation_mode: Some(NavigationMode::Normal.code()),
            spot_width: None,
            spot_height: None,
        },
        ApiDialect::Minimal2 => CleaningParams {
            category: category.code(),
            mode: None,
            modifier: Some(passes.code()),
            navigation_mode: Some(NavigationMode::Normal.code()),
            spot_width: None,
            spot_height: None,
        },
        ApiDialect::Basic2 => CleaningParams {
            category: category.code(),
            mode: Some(mode.code()),
            modifier: Some(passes.code()),
            navigation_mode: Some(NavigationMode::Normal.code()),
            spot_width: spot.map(|s| s.width_cm),
            spot_height: spot.map(|s| s.height_cm),
        },
        ApiDialect::Other(tag) => return Err(CoreError::UnknownDialect(tag.clone())),
    };
    Ok(params)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn shape(dialect: &ApiDialect) -> serde_json::Value {
        let params = cleaning_params(
            dialect,
            CleaningCategory::House,
            CleaningMode::Turbo,
            CleaningPasses::Single,
            None,
        )
        .unwrap();
        serde_json::to_value(&params).unwrap()
    }

    #[test]
    fn basic_1_shape() {
        assert_eq!(
            shape(&ApiDialect::Basic1),
            json!({"category": 2, "mode": 2, "modifier": 1})
        );
    }

    #[test]
    fn basic_2_shape() {
        assert_eq!(
            shape(&ApiDialect::Basic2),
            json!({"category": 2, "mode": 2, "modifier": 1, "navigationMode": 1})
        );
    }

    #[test]
    fn micro_2_drops_mode_and_modifier() {
        assert_eq!(
            shape(&ApiDialect::Micro2),
            json!({"category": 2, "navigationMode": 1})
        );
    }

    #[test]
    fn minimal_2_drops_mode() {
        assert_eq!(
            shape(&ApiDialect::Minimal2),
            json!({"category": 2, "modifier": 1, "navigationMode": 1})
        );
    }

    #[test]
    fn spot_category_code() {
        let params = cleaning_params(
            &ApiDialect::Basic1,
            CleaningCategory::Spot,
            CleaningMode::Eco,
            CleaningPasses::Double,
            None,
        )
        .unwrap();
        assert_eq!(params.category, 3);
        assert_eq!(params.mode, Some(1));
        assert_eq!(params.modifier, Some(2));
        assert_eq!(params.spot_width, None);
        assert_eq!(params.spot_height, None);
    }

    #[test]
    fn spot_size_carried_on_basic_dialects() {
        let size = SpotSize {
            width_cm: 200,
            height_cm: 150,
        };
        for dialect in [ApiDialect::Basic1, ApiDialect::Basic2] {
            let params = cleaning_params(
                &dialect,
                CleaningCategory::Spot,
                CleaningMode::Turbo,
                CleaningPasses::Single,
                Some(size),
            )
            .unwrap();
            assert_eq!(params.spot_width, Some(200));
            assert_eq!(params.spot_height, Some(150));
        }
    }

    #[test]
    fn spot_size_dropped_on_dialects_without_the_fields() {
        let size = SpotSize {
            width_cm: 200,
            height_cm: 150,
        };
        for dialect in [ApiDialect::Micro2, ApiDialect::Minimal2] {
            let params = cleaning_params(
                &dialect,
                CleaningCategory::Spot,
                CleaningMode::Turbo,
                CleaningPasses::Single,
                Some(size),
            )
            .unwrap();
            assert_eq!(params.spot_width, None);
            assert_eq!(params.spot_height, None);
        }
    }

    #[test]
    fn unknown_dialect_is_refused() {
        let err = cleaning_params(
            &ApiDialect::Other("advanced-1".into()),
            CleaningCategory::House,
            CleaningMode::Turbo,
            CleaningPasses::Single,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::UnknownDialect(ref tag) if tag == "advanced-1"));
    }
}
