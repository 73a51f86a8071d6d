mod host_card;
mod host_chart;
mod host_form;
mod host_list;
mod loading;
mod nav;
mod toast;

pub use host_card::HostCardView;
pub use host_chart::HostChartView;
pub use host_form::HostForm;
pub use host_list::HostList;
pub use loading::Loading;
pub use nav::Nav;
pub use toast::{ToastContainer, use_toasts};
