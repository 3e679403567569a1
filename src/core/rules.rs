use crate::domain::model::DeletionRule;
use crate::utils::error::Result;
use regex::{Regex, RegexBuilder};

/// 編譯刪除規則：開啟 multi-line 與 dot-matches-newline，pattern 才能跨行匹配
pub fn compile(rule: &DeletionRule) -> Result<Regex> {
    let re = RegexBuilder::new(&rule.pattern)
        .multi_line(true)
        .dot_matches_new_line(true)
        .build()?;
    Ok(re)
}

/// 內建規則集：把自動產生的 harness 測試 target 從 project.pbxproj 中除掉
///
/// 規則順序即套用順序，後面的規則作用在前面規則刪完之後的文字上。
/// 區塊型規則用 `[^}]*` 收斂在第一個右大括號，避免貪婪跨到別的 entry。
pub fn harness_test_rules() -> Vec<DeletionRule> {
    vec![
        // 產物的 file reference
        DeletionRule::new(
            "product-file-reference",
            r#"\t\t7A11AA032F90000100C0DE01 /\* osx-ideHarnessTests\.xctest \*/ = \{isa = PBXFileReference; explicitFileType = wrapper\.cfbundle; includeInIndex = 0; path = "osx-ideHarnessTests\.xctest"; sourceTree = BUILT_PRODUCTS_DIR; \};\n"#,
        ),
        // container item proxy 區塊
        DeletionRule::new(
            "container-item-proxy",
            r"\t\t7A11AA012F90000100C0DE01 /\* PBXContainerItemProxy \*/ = \{[^}]*\};\n",
        ),
        // file system synchronized group 區塊
        DeletionRule::new(
            "synchronized-group",
            r"\t\t7A11AA042F90000100C0DE01 /\* osx-ideHarnessTests \*/ = \{[^}]*\};\n",
        ),
        // main group 子項
        DeletionRule::new(
            "main-group-entry",
            r"\t\t\t\t7A11AA042F90000100C0DE01 /\* osx-ideHarnessTests \*/,\n",
        ),
        // Products group 子項
        DeletionRule::new(
            "products-group-entry",
            r"\t\t\t\t7A11AA032F90000100C0DE01 /\* osx-ideHarnessTests\.xctest \*/,\n",
        ),
        // native target 區塊
        DeletionRule::new(
            "native-target",
            r"\t\t7A11AA082F90000100C0DE01 /\* osx-ideHarnessTests \*/ = \{[^}]*\};\n",
        ),
        // project targets 列表項
        DeletionRule::new(
            "project-target-entry",
            r"\t\t\t\t7A11AA082F90000100C0DE01 /\* osx-ideHarnessTests \*/,\n",
        ),
        // target dependency 列表項
        DeletionRule::new(
            "target-dependency-entry",
            r"\t\t\t\t7A11AA022F90000100C0DE01 /\* PBXTargetDependency \*/,\n",
        ),
        // build configuration list 區塊
        DeletionRule::new(
            "build-configuration-list",
            r#"\t\t7A11AA0B2F90000100C0DE01 /\* Build configuration list for PBXNativeTarget "osx-ideHarnessTests" \*/ = \{[^}]*\};\n"#,
        ),
        // Debug / Release build configuration，用 bundle identifier 錨定
        DeletionRule::new(
            "debug-build-configuration",
            r#"\t\t7A11AA092F90000100C0DE01 /\* Debug \*/ = \{[^}]*PRODUCT_BUNDLE_IDENTIFIER = "tdc\.osx-ideHarnessTests"[^}]*\};\n"#,
        ),
        DeletionRule::new(
            "release-build-configuration",
            r#"\t\t7A11AA0A2F90000100C0DE01 /\* Release \*/ = \{[^}]*PRODUCT_BUNDLE_IDENTIFIER = "tdc\.osx-ideHarnessTests"[^}]*\};\n"#,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_rules_compile() {
        for rule in harness_test_rules() {
            assert!(
                compile(&rule).is_ok(),
                "rule '{}' failed to compile",
                rule.name
            );
        }
    }

    #[test]
    fn test_builtin_rule_names_unique() {
        let rules = harness_test_rules();
        let names: HashSet<&str> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), rules.len());
    }

    #[test]
    fn test_file_reference_rule_matches_exact_line() {
        let line = "\t\t7A11AA032F90000100C0DE01 /* osx-ideHarnessTests.xctest */ = {isa = PBXFileReference; explicitFileType = wrapper.cfbundle; includeInIndex = 0; path = \"osx-ideHarnessTests.xctest\"; sourceTree = BUILT_PRODUCTS_DIR; };\n";
        let rules = harness_test_rules();
        let re = compile(&rules[0]).unwrap();

        assert!(re.is_match(line));
        assert_eq!(re.replace_all(line, ""), "");
    }

    #[test]
    fn test_block_rule_stops_at_first_closing_brace() {
        let text = "\t\t7A11AA012F90000100C0DE01 /* PBXContainerItemProxy */ = {\n\t\t\tisa = PBXContainerItemProxy;\n\t\t\tproxyType = 1;\n\t\t};\n\t\t7A11AA052F90000100C0DE02 /* other */ = {\n\t\t\tisa = PBXGroup;\n\t\t};\n";
        let rule = &harness_test_rules()[1];
        let re = compile(rule).unwrap();

        let cleaned = re.replace_all(text, "");
        assert!(!cleaned.contains("PBXContainerItemProxy"));
        assert!(cleaned.contains("7A11AA052F90000100C0DE02"));
    }

    #[test]
    fn test_rule_with_invalid_pattern_fails_to_compile() {
        let rule = DeletionRule::new("broken", r"\t\t[unclosed");
        assert!(compile(&rule).is_err());
    }
}
