//! Interactive widget state for the Boult.neu storefront.
//!
//! Each widget owns only its own transient state:
//!
//! - **Carousel**: cyclic slide index with auto-advance and a transition lock
//! - **Filter panel**: selected tags and price slider, converted to listing criteria
//! - **Password**: strength rules, score and label
//! - **Forms**: profile and password change validation, simulated submit
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_widgets::prelude::*;
//!
//! let strength = PasswordStrength::evaluate("Password1!");
//! assert_eq!(strength.label(), StrengthLabel::VeryStrong);
//!
//! let driver = CarouselDriver::spawn(3, CarouselTiming::default())?;
//! driver.next().await?;
//! ```

pub mod carousel;
pub mod error;
pub mod filter_panel;
pub mod forms;
pub mod password;
pub mod submit;

pub use error::{FieldError, WidgetError, WidgetResult};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{FieldError, WidgetError, WidgetResult};

    pub use crate::carousel::{
        Carousel, CarouselCommand, CarouselDriver, CarouselState, CarouselTiming,
    };
    pub use crate::filter_panel::{rating_threshold, FilterGroup, FilterPanel, PriceSlider};
    pub use crate::forms::{is_valid_email, Gender, PasswordChangeForm, ProfileForm};
    pub use crate::password::{
        validate_password, PasswordRule, PasswordStrength, StrengthLabel, MIN_PASSWORD_LENGTH,
    };
    pub use crate::submit::{
        AccountService, AccountSettings, Notice, SimulatedAccountService, SubmitConfig,
        SubmitState,
    };
}
