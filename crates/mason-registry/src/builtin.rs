//! Built-in lifecycle definitions
//!
//! The goal coordinates pinned here are part of the persisted
//! behavioral contract: downstream consumers rely on the exact
//! `groupId:artifactId:version:goal` strings, so they are reproduced
//! bit-for-bit and covered by tests.

use mason_lifecycle::{Alias, GoalBinding, Lifecycle, Phase, TreeLifecycle};

/// Id of the cleanup lifecycle.
pub const CLEAN: &str = "clean";
/// Id of the default build lifecycle.
pub const DEFAULT: &str = "default";
/// Id of the site-generation lifecycle.
pub const SITE: &str = "site";
/// Id of the bootstrap wrapper lifecycle.
pub const WRAPPER: &str = "wrapper";

const CLEAN_PLUGIN_VERSION: &str = "3.2.0";
const SITE_PLUGIN_VERSION: &str = "3.12.1";
const WRAPPER_PLUGIN_VERSION: &str = "3.2.0";

/// The canonical phase sequence of the default build lifecycle. This
/// is both the declared authoritative ordering and the sequence the
/// graph computes from the tree.
pub const STANDARD_PHASES: [&str; 23] = [
    "validate",
    "initialize",
    "generate-sources",
    "process-sources",
    "generate-resources",
    "process-resources",
    "compile",
    "process-classes",
    "generate-test-sources",
    "process-test-sources",
    "generate-test-resources",
    "process-test-resources",
    "test-compile",
    "process-test-classes",
    "test",
    "prepare-package",
    "package",
    "pre-integration-test",
    "integration-test",
    "post-integration-test",
    "verify",
    "install",
    "deploy",
];

/// All built-in lifecycles, in registration order.
#[must_use]
pub fn all() -> Vec<Lifecycle> {
    vec![clean(), default_build(), site(), wrapper()]
}

/// The cleanup lifecycle: pre-clean / clean / post-clean.
#[must_use]
pub fn clean() -> Lifecycle {
    Lifecycle::Tree(
        TreeLifecycle::new(CLEAN)
            .phase(Phase::new("clean").bind(GoalBinding::new(format!(
                "org.apache.maven.plugins:maven-clean-plugin:{CLEAN_PLUGIN_VERSION}:clean"
            ))))
            .alias(Alias::new("pre-clean", "pre:clean"))
            .alias(Alias::new("post-clean", "post:clean")),
    )
}

/// The default build lifecycle: the full validate → … → deploy chain.
///
/// Ten real phases chain in declared order; the thirteen legacy
/// `generate-*` / `process-*` / `prepare-*` names are aliases placed
/// inside the spans of the phases they historically preceded or
/// followed.
#[must_use]
pub fn default_build() -> Lifecycle {
    Lifecycle::Tree(default_tree().ordered(STANDARD_PHASES))
}

fn default_tree() -> TreeLifecycle {
    TreeLifecycle::new(DEFAULT)
        .phase(Phase::new("validate"))
        .phase(Phase::new("initialize"))
        .phase(Phase::new("compile"))
        .phase(Phase::new("test-compile"))
        .phase(Phase::new("test"))
        .phase(Phase::new("package"))
        .phase(Phase::new("integration-test"))
        .phase(Phase::new("verify"))
        .phase(Phase::new("install"))
        .phase(Phase::new("deploy"))
        .alias(Alias::new("generate-sources", "pre:compile"))
        .alias(Alias::new("process-sources", "pre:compile"))
        .alias(Alias::new("generate-resources", "pre:compile"))
        .alias(Alias::new("process-resources", "pre:compile"))
        .alias(Alias::new("process-classes", "post:compile"))
        .alias(Alias::new("generate-test-sources", "pre:test-compile"))
        .alias(Alias::new("process-test-sources", "pre:test-compile"))
        .alias(Alias::new("generate-test-resources", "pre:test-compile"))
        .alias(Alias::new("process-test-resources", "pre:test-compile"))
        .alias(Alias::new("process-test-classes", "post:test-compile"))
        .alias(Alias::new("prepare-package", "pre:package"))
        .alias(Alias::new("pre-integration-test", "pre:integration-test"))
        .alias(Alias::new("post-integration-test", "post:integration-test"))
}

/// The site-generation lifecycle: pre-site / site / post-site /
/// site-deploy.
#[must_use]
pub fn site() -> Lifecycle {
    Lifecycle::Tree(
        TreeLifecycle::new(SITE)
            .phase(Phase::new("site").bind(GoalBinding::new(format!(
                "org.apache.maven.plugins:maven-site-plugin:{SITE_PLUGIN_VERSION}:site"
            ))))
            .phase(
                Phase::new("site-deploy")
                    .after("site")
                    .bind(GoalBinding::new(format!(
                        "org.apache.maven.plugins:maven-site-plugin:{SITE_PLUGIN_VERSION}:deploy"
                    ))),
            )
            .alias(Alias::new("pre-site", "pre:site"))
            .alias(Alias::new("post-site", "post:site")),
    )
}

/// The bootstrap wrapper lifecycle: a single phase.
#[must_use]
pub fn wrapper() -> Lifecycle {
    Lifecycle::Tree(TreeLifecycle::new(WRAPPER).phase(Phase::new("wrapper").bind(
        GoalBinding::new(format!(
            "org.apache.maven.plugins:maven-wrapper-plugin:{WRAPPER_PLUGIN_VERSION}:wrapper"
        )),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mason_graph::build_graph;

    fn tree(lifecycle: &Lifecycle) -> &TreeLifecycle {
        match lifecycle {
            Lifecycle::Tree(tree) => tree,
            Lifecycle::Map(_) => panic!("built-in lifecycles are tree based"),
        }
    }

    fn computed_order(lifecycle: &Lifecycle) -> Vec<String> {
        build_graph(tree(lifecycle))
            .unwrap()
            .phase_order()
            .unwrap()
    }

    #[test]
    fn default_tree_computes_the_standard_sequence() {
        // The computed order matches the declared ordering exactly,
        // not just in size.
        assert_eq!(
            build_graph(&default_tree()).unwrap().phase_order().unwrap(),
            STANDARD_PHASES
        );
    }

    #[test]
    fn clean_order_brackets_the_clean_phase() {
        assert_eq!(computed_order(&clean()), ["pre-clean", "clean", "post-clean"]);
    }

    #[test]
    fn site_order_places_deploy_last() {
        assert_eq!(
            computed_order(&site()),
            ["pre-site", "site", "post-site", "site-deploy"]
        );
    }

    #[test]
    fn wrapper_is_a_single_phase() {
        assert_eq!(computed_order(&wrapper()), ["wrapper"]);
    }

    #[test]
    fn pinned_goal_coordinates_are_bit_for_bit() {
        let clean_lifecycle = clean();
        assert_eq!(
            tree(&clean_lifecycle).phases()[0]
                .binding()
                .unwrap()
                .coordinates(),
            "org.apache.maven.plugins:maven-clean-plugin:3.2.0:clean"
        );

        let site_lifecycle = site();
        let site_phases = tree(&site_lifecycle).phases();
        assert_eq!(
            site_phases[0].binding().unwrap().coordinates(),
            "org.apache.maven.plugins:maven-site-plugin:3.12.1:site"
        );
        assert_eq!(
            site_phases[1].binding().unwrap().coordinates(),
            "org.apache.maven.plugins:maven-site-plugin:3.12.1:deploy"
        );

        let wrapper_lifecycle = wrapper();
        assert_eq!(
            tree(&wrapper_lifecycle).phases()[0]
                .binding()
                .unwrap()
                .coordinates(),
            "org.apache.maven.plugins:maven-wrapper-plugin:3.2.0:wrapper"
        );
    }

    #[test]
    fn default_declares_the_standard_ordering() {
        let default_lifecycle = default_build();
        let declared = tree(&default_lifecycle).ordered_phases().unwrap();
        assert_eq!(declared.len(), STANDARD_PHASES.len());
        assert_eq!(declared, STANDARD_PHASES);
    }
}
