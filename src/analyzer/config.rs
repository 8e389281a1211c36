/// Tunables for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// How deeply nested expressions may recurse while pending calls are
    /// resolved before `ResolutionTooDeep` is reported.
    pub max_resolution_depth: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            max_resolution_depth: 256,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_max_resolution_depth(mut self, max_resolution_depth: usize) -> Self {
        self.max_resolution_depth = max_resolution_depth;
        self
    }
}
