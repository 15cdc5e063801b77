#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    // Add required imports
    use tailwind_prefixer::prefix::types::PrefixOptions;
    use tailwind_prefixer::ClassPrefixer;

    fn prefixer() -> ClassPrefixer {
        ClassPrefixer::new(PrefixOptions::new("tw-")).unwrap()
    }

    #[test]
    fn test_plain_utilities_take_prefix() {
        let code = prefixer().transform(r#"<div className="flex items-center" />"#, "src/App.tsx");

        assert_eq!(code, r#"<div className="tw-flex tw-items-center" />"#);
    }

    #[test]
    fn test_modifier_and_important_markers() {
        let input = r#"
        <button className="hover:text-red-500 !font-bold md:hover:underline">
          Save
        </button>
        "#;

        let code = prefixer().transform(input, "src/Button.tsx");

        assert!(
            code.contains(r#"className="hover:tw-text-red-500 !tw-font-bold md:hover:tw-underline""#),
            "Modifiers should keep their chain and the important marker should stay in front"
        );
    }

    #[test]
    fn test_arbitrary_value_lists_pass_through() {
        // The whole occurrence is left alone, including plain tokens next to
        // the arbitrary value
        let input = r#"<div className="flex [mask-type:alpha]" />"#;
        let output = prefixer().transform_with_stats(input, "src/Mask.tsx");

        assert_eq!(output.code, input, "Arbitrary values should suppress the rewrite");
        assert_eq!(output.stats.attributes_skipped, 1);
        assert_eq!(output.stats.attributes_rewritten, 0);
    }

    #[test]
    fn test_braced_literals_keep_delimiter_style() {
        let input = "<i className={\"flex gap-2\"} /><em className={'grid'} /><b className={`block`} />";

        let code = prefixer().transform(input, "src/Text.jsx");

        assert_eq!(
            code,
            "<i className={\"tw-flex tw-gap-2\"} /><em className={'tw-grid'} /><b className={`tw-block`} />"
        );
    }

    #[test]
    fn test_already_prefixed_classes_stay_stable() {
        let prefixer = prefixer();

        let code = prefixer.transform(r#"<div className="tw-flex flex" />"#, "src/App.tsx");
        assert_eq!(code, r#"<div className="tw-flex tw-flex" />"#);

        // A fully prefixed attribute is matched but nothing changes
        let input = r#"<div className="tw-flex tw-gap-2" />"#;
        let output = prefixer.transform_with_stats(input, "src/App.tsx");

        assert_eq!(output.code, input);
        assert_eq!(output.stats.attributes_matched, 1);
        assert_eq!(output.stats.attributes_rewritten, 0);
        assert_eq!(output.stats.tokens_passed_through, 2);
        assert!(!output.stats.changed(), "Untouched output should not report a change");
    }

    #[test]
    fn test_transform_is_idempotent() {
        let prefixer = prefixer();
        let input = r#"
        <nav className="flex items-center">
          <a className={'hover:text-sky-600'}>Home</a>
          <a className="!font-bold">Docs</a>
        </nav>
        "#;

        let first = prefixer.transform(input, "src/Nav.tsx");
        let second = prefixer.transform_with_stats(&first, "src/Nav.tsx");

        assert_eq!(second.code, first, "Re-running the transform should change nothing");
        assert!(!second.stats.changed());
        assert_eq!(second.stats.tokens_prefixed, 0);
    }

    #[test]
    fn test_dynamic_expressions_pass_through() {
        let inputs = [
            // Expression values are out of reach for the rewrite
            r#"<div className={styles.card} />"#,
            r#"<div className={clsx("flex", active && "underline")} />"#,
            r#"<div className={cond ? "flex" : "grid"} />"#,
            // Template literal with interpolation
            "<div className={`flex ${extra}`} />",
            // Whitespace between brace and quote keeps the literal out of reach
            r#"<div className={ "flex gap-2" } />"#,
        ];

        let prefixer = prefixer();
        for input in inputs {
            let output = prefixer.transform_with_stats(input, "src/Dynamic.tsx");
            assert_eq!(output.code, input, "Dynamic value should pass through: {}", input);
            assert!(!output.stats.changed());
        }
    }

    #[test]
    fn test_interpolation_marker_suppresses_rewrite() {
        let input = r#"<div className="flex ${extra}" />"#;
        let output = prefixer().transform_with_stats(input, "src/Odd.tsx");

        assert_eq!(output.code, input);
        assert_eq!(output.stats.attributes_skipped, 1);
    }

    #[test]
    fn test_excluded_path_returns_identical_input() {
        let options = PrefixOptions::with_exclude(
            "tw-",
            vec!["node_modules".to_string(), r"\.stories\.tsx$".to_string()],
        );
        let prefixer = ClassPrefixer::new(options).unwrap();

        // Odd spacing would normally be normalized, so byte equality proves
        // the exclusion short-circuits before any rewriting
        let input = r#"<div className = "flex" />"#;

        for path in ["node_modules/ui/Button.tsx", "src/Button.stories.tsx"] {
            let output = prefixer.transform_with_stats(input, path);
            assert_eq!(output.code, input, "Excluded path should be untouched: {}", path);
            assert_eq!(output.stats.attributes_matched, 0);
        }

        // A path outside the exclusions is still transformed
        let code = prefixer.transform(input, "src/Button.tsx");
        assert_eq!(code, r#"<div className="tw-flex" />"#);
    }

    #[test]
    fn test_attribute_spacing_is_normalized() {
        let prefixer = prefixer();

        let code = prefixer.transform(r#"<div className = "flex" />"#, "src/App.tsx");
        assert_eq!(code, r#"<div className="tw-flex" />"#);

        let code = prefixer.transform("<div className = {'flex'} />", "src/App.tsx");
        assert_eq!(code, "<div className={'tw-flex'} />");
    }

    #[test]
    fn test_token_order_is_preserved() {
        let code = prefixer().transform(
            r#"<div className="flex hover:underline gap-2" />"#,
            "src/App.tsx",
        );

        assert_eq!(code, r#"<div className="tw-flex hover:tw-underline tw-gap-2" />"#);
    }

    #[test]
    fn test_custom_prefix() {
        let prefixer = ClassPrefixer::new(PrefixOptions::new("app-")).unwrap();

        let code = prefixer.transform(r#"<div className="flex app-card" />"#, "src/App.tsx");

        assert_eq!(code, r#"<div className="app-flex app-card" />"#);
        assert_eq!(prefixer.prefix(), "app-");
        assert_eq!(prefixer.options().prefix, "app-");
        assert_eq!(prefixer.prefix_class("hover:flex"), "hover:app-flex");
    }

    #[test]
    fn test_component_end_to_end() {
        let input = r#"import React from "react";
import clsx from "clsx";

const FALLBACK = "flex items-center";

export function Card({ title, danger, children }) {
  return (
    <section className="rounded-lg border p-4">
      <header className={`flex items-baseline gap-2`}>
        <h2 className="text-lg font-semibold hover:underline">{title}</h2>
        <span className={danger ? "text-red-500" : "text-slate-500"}>*</span>
      </header>
      <div className={'mt-2 [mask-type:alpha]'}>
        <p className="[display:grid] leading-tight">{children}</p>
      </div>
      <footer className={clsx("mt-4", danger && "border-red-500")}>
        <button className="!font-bold md:hover:bg-slate-100">Ok</button>
      </footer>
    </section>
  );
}
"#;

        let expected = r#"import React from "react";
import clsx from "clsx";

const FALLBACK = "flex items-center";

export function Card({ title, danger, children }) {
  return (
    <section className="tw-rounded-lg tw-border tw-p-4">
      <header className={`tw-flex tw-items-baseline tw-gap-2`}>
        <h2 className="tw-text-lg tw-font-semibold hover:tw-underline">{title}</h2>
        <span className={danger ? "text-red-500" : "text-slate-500"}>*</span>
      </header>
      <div className={'mt-2 [mask-type:alpha]'}>
        <p className="[display:grid] leading-tight">{children}</p>
      </div>
      <footer className={clsx("mt-4", danger && "border-red-500")}>
        <button className="!tw-font-bold md:hover:tw-bg-slate-100">Ok</button>
      </footer>
    </section>
  );
}
"#;

        let output = prefixer().transform_with_stats(input, "src/Card.tsx");

        assert_eq!(output.code, expected);
        assert_eq!(output.stats.attributes_matched, 6, "Should match six class attributes");
        assert_eq!(output.stats.attributes_rewritten, 4, "Should rewrite four of them");
        assert_eq!(output.stats.attributes_skipped, 2, "Should skip the two arbitrary-value lists");
        assert_eq!(output.stats.tokens_prefixed, 11);
        assert_eq!(output.stats.tokens_passed_through, 0);
        assert!(output.stats.changed());
    }
}
