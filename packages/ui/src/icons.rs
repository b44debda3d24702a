//! Icon identifiers used by the static tables, and the component that
//! renders them.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_regular_icons;
use dioxus_free_icons::icons::fa_solid_icons::*;
use dioxus_free_icons::Icon;

/// Every icon the pages draw. Tables hold these instead of icon types so
/// rows of different icons fit in one `Vec`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    GraduationCap,
    Building,
    ShieldHalved,
    Heart,
    HeartOutline,
    FileLines,
    Calendar,
    Comments,
    Users,
    ChartLine,
    MagnifyingGlass,
    CreditCard,
    Plus,
    LocationDot,
    Star,
    Eye,
    EyeSlash,
    Spinner,
    Wifi,
    Car,
    Utensils,
    Dumbbell,
    Bolt,
    Shirt,
    Snowflake,
    Check,
    CircleCheck,
    CircleExclamation,
    TriangleExclamation,
    CircleInfo,
    Sun,
    Moon,
    CircleHalfStroke,
    SignOut,
    Gear,
    House,
}

#[component]
pub fn AppIcon(
    kind: IconKind,
    #[props(default = 16)] size: u32,
    #[props(default, into)] class: String,
) -> Element {
    let (w, h) = (size, size);
    let icon = match kind {
        IconKind::GraduationCap => rsx! { Icon { icon: FaGraduationCap, width: w, height: h } },
        IconKind::Building => rsx! { Icon { icon: FaBuilding, width: w, height: h } },
        IconKind::ShieldHalved => rsx! { Icon { icon: FaShieldHalved, width: w, height: h } },
        IconKind::Heart => rsx! { Icon { icon: FaHeart, width: w, height: h } },
        IconKind::HeartOutline => {
            rsx! { Icon { icon: fa_regular_icons::FaHeart, width: w, height: h } }
        }
        IconKind::FileLines => rsx! { Icon { icon: FaFileLines, width: w, height: h } },
        IconKind::Calendar => rsx! { Icon { icon: FaCalendar, width: w, height: h } },
        IconKind::Comments => rsx! { Icon { icon: FaComments, width: w, height: h } },
        IconKind::Users => rsx! { Icon { icon: FaUsers, width: w, height: h } },
        IconKind::ChartLine => rsx! { Icon { icon: FaChartLine, width: w, height: h } },
        IconKind::MagnifyingGlass => rsx! { Icon { icon: FaMagnifyingGlass, width: w, height: h } },
        IconKind::CreditCard => rsx! { Icon { icon: FaCreditCard, width: w, height: h } },
        IconKind::Plus => rsx! { Icon { icon: FaPlus, width: w, height: h } },
        IconKind::LocationDot => rsx! { Icon { icon: FaLocationDot, width: w, height: h } },
        IconKind::Star => rsx! { Icon { icon: FaStar, width: w, height: h } },
        IconKind::Eye => rsx! { Icon { icon: FaEye, width: w, height: h } },
        IconKind::EyeSlash => rsx! { Icon { icon: FaEyeSlash, width: w, height: h } },
        IconKind::Spinner => rsx! { Icon { icon: FaSpinner, width: w, height: h } },
        IconKind::Wifi => rsx! { Icon { icon: FaWifi, width: w, height: h } },
        IconKind::Car => rsx! { Icon { icon: FaCar, width: w, height: h } },
        IconKind::Utensils => rsx! { Icon { icon: FaUtensils, width: w, height: h } },
        IconKind::Dumbbell => rsx! { Icon { icon: FaDumbbell, width: w, height: h } },
        IconKind::Bolt => rsx! { Icon { icon: FaBolt, width: w, height: h } },
        IconKind::Shirt => rsx! { Icon { icon: FaShirt, width: w, height: h } },
        IconKind::Snowflake => rsx! { Icon { icon: FaSnowflake, width: w, height: h } },
        IconKind::Check => rsx! { Icon { icon: FaCheck, width: w, height: h } },
        IconKind::CircleCheck => rsx! { Icon { icon: FaCircleCheck, width: w, height: h } },
        IconKind::CircleExclamation => {
            rsx! { Icon { icon: FaCircleExclamation, width: w, height: h } }
        }
        IconKind::TriangleExclamation => {
            rsx! { Icon { icon: FaTriangleExclamation, width: w, height: h } }
        }
        IconKind::CircleInfo => rsx! { Icon { icon: FaCircleInfo, width: w, height: h } },
        IconKind::Sun => rsx! { Icon { icon: FaSun, width: w, height: h } },
        IconKind::Moon => rsx! { Icon { icon: FaMoon, width: w, height: h } },
        IconKind::CircleHalfStroke => {
            rsx! { Icon { icon: FaCircleHalfStroke, width: w, height: h } }
        }
        IconKind::SignOut => {
            rsx! { Icon { icon: FaArrowRightFromBracket, width: w, height: h } }
        }
        IconKind::Gear => rsx! { Icon { icon: FaGear, width: w, height: h } },
        IconKind::House => rsx! { Icon { icon: FaHouse, width: w, height: h } },
    };

    rsx! {
        span { class: "icon {class}", {icon} }
    }
}
