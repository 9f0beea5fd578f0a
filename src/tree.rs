/// The fixed directory tree this tool manages, as slash-separated paths
/// relative to the project root. Order only controls report ordering;
/// correctness does not depend on it. Entries must stay unique.
pub const DIRECTORY_STRUCTURE: &[&str] = &[
    // Agent toolkit configuration
    ".adk",
    ".adk/config",
    // Source code
    "src",
    "src/agents",
    "src/agents/base",
    "src/agents/coding",
    "src/agents/orchestration",
    "src/agents/specialized",
    // Prompts and templates
    "prompts",
    "prompts/system_prompts",
    "prompts/cursorrules_templates",
    "prompts/prompt_patterns",
    // Tools and utilities
    "tools",
    "tools/diagnostic",
    "tools/observability",
    "tools/security",
    "tools/data_management",
    "tools/deployment",
    // Testing
    "tests",
    "tests/unit",
    "tests/unit/agent_tests",
    "tests/unit/tool_tests",
    "tests/unit/integration_tests",
    "tests/benchmarks",
    "tests/security",
    "tests/e2e",
    // Infrastructure
    "infrastructure",
    "infrastructure/docker",
    "infrastructure/kubernetes",
    "infrastructure/terraform",
    "infrastructure/helm",
    "infrastructure/helm/templates",
    // Monitoring
    "monitoring",
    "monitoring/dashboards",
    "monitoring/alerts",
    "monitoring/logs",
    // GitHub
    ".github",
    ".github/workflows",
    ".github/templates",
    // Documentation
    "docs",
    "docs/setup",
    "docs/architecture",
    "docs/api",
    "docs/best_practices",
    "docs/compliance",
    // Configuration
    "config",
    "config/production",
    "config/development",
    "config/local",
    // Scripts
    "scripts",
    "scripts/setup",
    "scripts/deployment",
    "scripts/maintenance",
    "scripts/monitoring",
    // Data
    "data",
    "data/vector_stores",
    "data/vector_stores/code_embeddings",
    "data/vector_stores/documentation_embeddings",
    "data/vector_stores/best_practices_embeddings",
    "data/training_data",
    "data/training_data/code_examples",
    "data/training_data/review_examples",
    "data/training_data/test_cases",
    "data/benchmarks",
    "data/benchmarks/gaia_dataset",
    "data/benchmarks/swe_bench_data",
    "data/benchmarks/performance_baselines",
    // Requirements
    "requirements",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entries_are_unique() {
        let mut seen = HashSet::new();
        for path in DIRECTORY_STRUCTURE {
            assert!(seen.insert(path), "duplicate entry: {path}");
        }
    }

    #[test]
    fn entries_are_relative_slash_separated_paths() {
        for path in DIRECTORY_STRUCTURE {
            assert!(!path.is_empty());
            assert!(!path.starts_with('/'), "absolute entry: {path}");
            assert!(!path.contains('\\'), "backslash in entry: {path}");
            assert!(!path.ends_with('/'), "trailing slash in entry: {path}");
        }
    }
}
