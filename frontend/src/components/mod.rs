mod dialog;
mod disclosure;
mod icons;
mod menu;
mod switch;
mod tab_group;
mod transition;

pub use dialog::Dialog;
pub use disclosure::Disclosure;
pub use icons::{Bars3Icon, ChevronDownIcon, XMarkIcon};
pub use menu::Menu;
pub use switch::Switch;
pub use tab_group::{TabEntry, TabGroup};
pub use transition::Transition;
