use bon::Builder;

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Builder)]
pub struct RenderOptions {
    /// Suffix every node label with the id of its clause,
    /// e.g. `x1` in clause 2 is labelled `x1_2`.
    #[builder(default = false)]
    pub include_cluster_id_in_label: bool,

    #[builder(default = String::from("G"))]
    #[builder(into)]
    pub graph_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::builder().build()
    }
}
