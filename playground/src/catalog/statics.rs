//! Associated functions and constants, and overridable trait defaults.

use harness::{Registry, say};

use super::example;

const TOPIC: &str = "statics";

pub fn register(registry: &mut Registry) -> harness::Result<()> {
    registry.insert(example(
        TOPIC,
        "app-utility",
        || {
            AppUtils::app_utility();
            Ok(())
        },
        &["HI"],
    ))?;
    registry.insert(example(
        TOPIC,
        "food",
        || {
            say!("rice varieties: {}", Rice::varieties().join(", "));
            for group in [FoodGroup::Proteins, FoodGroup::Carbohydrates] {
                say!("rice goes with {group:?}: {}", Rice::goes_with(group));
            }
            Ok(())
        },
        &[
            "rice varieties: white, brown",
            "rice goes with Proteins: true",
            "rice goes with Carbohydrates: false",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "override",
        || {
            say!("{}", AppUtilsParent::app_utility());
            say!("{}", AppOtherUtils::app_utility());
            Ok(())
        },
        &["In AppUtils", "In AppOtherUtils"],
    ))?;
    registry.insert(example(
        TOPIC,
        "override-super",
        || {
            SubTypeMethods::some_type_method();
            Ok(())
        },
        &["HEllo", "SUB"],
    ))?;
    registry.insert(example(
        TOPIC,
        "global-function",
        || {
            say!("{}", im_global_func());
            Ok(())
        },
        &["callable from anywhere"],
    ))?;
    Ok(())
}

struct AppUtils;

impl AppUtils {
    fn app_utility() {
        say!("HI");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FoodGroup {
    Carbohydrates,
    Proteins,
}

trait Food {
    fn varieties() -> Vec<&'static str>;
    fn goes_with(group: FoodGroup) -> bool;
}

struct Rice;

impl Food for Rice {
    fn varieties() -> Vec<&'static str> {
        vec!["white", "brown"]
    }

    fn goes_with(group: FoodGroup) -> bool {
        group != FoodGroup::Carbohydrates
    }
}

/// Type-level function with a default that implementors may replace.
trait AppUtility {
    fn app_utility() -> &'static str {
        "In AppUtils"
    }
}

struct AppUtilsParent;

impl AppUtility for AppUtilsParent {}

struct AppOtherUtils;

impl AppUtility for AppOtherUtils {
    fn app_utility() -> &'static str {
        "In AppOtherUtils"
    }
}

trait TypeMethod {
    fn some_type_method() {
        say!("HEllo");
    }
}

struct BaseTypeMethods;

impl TypeMethod for BaseTypeMethods {}

/// Replaces the type method but still runs the base behaviour first.
struct SubTypeMethods;

impl TypeMethod for SubTypeMethods {
    fn some_type_method() {
        BaseTypeMethods::some_type_method();
        say!("SUB");
    }
}

fn im_global_func() -> &'static str {
    "callable from anywhere"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_type_method_prints_only_its_own_line() {
        let (lines, ()) = harness::sink::capture(BaseTypeMethods::some_type_method);
        assert_eq!(lines, vec!["HEllo"]);
    }

    #[test]
    fn overriding_type_method_runs_base_first() {
        let (lines, ()) = harness::sink::capture(SubTypeMethods::some_type_method);
        assert_eq!(lines, vec!["HEllo", "SUB"]);
    }
}
