pub mod avatar;
pub mod button;
pub mod icons;
pub mod search_input;

pub use avatar::Avatar;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::{BellIcon, ChevronsUpDownIcon, GridIcon, LogoMark, SearchIcon};
pub use search_input::SearchInput;
