#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Primary list, catalog order.
    pub catalog: Vec<CatalogRowView>,
    /// Secondary list, selection order.
    pub selection: Vec<SelectionRowView>,
    pub loading: bool,
    pub errored: bool,
    pub exhausted: bool,
    pub error_message: Option<String>,
    pub total_count: Option<u64>,
    pub dirty: bool,
}

impl AppViewModel {
    /// The trailing loader row is shown while more pages may still arrive.
    pub fn show_loader(&self) -> bool {
        !self.exhausted && !self.errored
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRowView {
    pub name: String,
    pub url: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRowView {
    pub name: String,
    pub url: String,
}
