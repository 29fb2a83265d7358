//! Output formatting tests for layout command.

#[cfg(test)]
mod tests {
    use super::super::execute::LayoutResult;
    use crate::geometry::CircleRing;
    use rstest::{fixture, rstest};

    const SMALL_TABLE: &str = "\
Layout

Rollers (3 x r1.000 on R10.000):
   1  x=10.000  y=0.000
   2  x=-5.000  y=8.660
   3  x=-5.000  y=-8.660

Output holes (3 x r2.100 on R4.000):
   1  x=4.000  y=0.000
   2  x=-2.000  y=3.464
   3  x=-2.000  y=-3.464";

    #[fixture]
    fn small_result() -> LayoutResult {
        LayoutResult {
            rollers: CircleRing::new(10.0, 3, 1.0),
            output_holes: CircleRing::new(4.0, 3, 2.1),
            warnings: vec![],
        }
    }

    #[fixture]
    fn warning_result() -> LayoutResult {
        LayoutResult {
            warnings: vec!["R should usually be larger than Rr".to_string()],
            ..small_result()
        }
    }

    crate::output_table_test! {
        test_name: test_to_table_small,
        fixture: small_result,
        fixture_type: LayoutResult,
        expected: SMALL_TABLE,
    }

    crate::output_table_contains_test! {
        test_name: test_to_table_with_warnings,
        fixture: warning_result,
        fixture_type: LayoutResult,
        contains: ["Warnings (1):", "  - R should usually be larger than Rr"],
    }

    #[rstest]
    fn test_format_json(small_result: LayoutResult) {
        use crate::output::{OutputFormat, Outputable};
        let parsed: serde_json::Value =
            serde_json::from_str(&small_result.format(OutputFormat::Json)).unwrap();
        assert_eq!(parsed["rollers"]["pitch_radius"], 10.0);
        assert_eq!(parsed["rollers"]["centres"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["output_holes"]["radius"], 2.1);
        assert_eq!(parsed["warnings"], serde_json::json!([]));
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: small_result,
        fixture_type: LayoutResult,
        contains: ["rollers:", "output_holes:"],
    }
}
