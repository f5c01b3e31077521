//! Per-category rule emission.
//!
//! Each emitter writes the base rule first, then state and sub-control
//! rules, then variant rules, then the shared disabled rule so it wins over
//! any variant color.

use super::document::{Category, Declaration, StyleRule};
use super::selector::{Selector, State};
use super::DISABLED_OPACITY;
use crate::tokens::{Color, ColorToken::*, Radius, ResolvedPalette, Spacing, Typography};

macro_rules! decls {
    ($($property:literal: $value:expr),* $(,)?) => {
        vec![$(Declaration::new($property, $value)),*]
    };
}

/// Text drawn on top of the accent color.
const ON_ACCENT: Color = Color::hex(0x000000);
/// Text drawn on top of the danger color.
const ON_DANGER: Color = Color::hex(0xffffff);

fn px(value: u32) -> String {
    format!("{}px", value)
}

fn px2(vertical: u32, horizontal: u32) -> String {
    format!("{}px {}px", vertical, horizontal)
}

fn solid(width: &str, color: Color) -> String {
    format!("{} solid {}", width, color)
}

const BUTTON: &[&str] = &["QPushButton"];
const LABEL: &[&str] = &["QLabel"];
const TEXT_INPUTS: &[&str] = &["QLineEdit", "QTextEdit", "QPlainTextEdit"];
const COMBO: &[&str] = &["QComboBox"];
const CHECK_RADIO: &[&str] = &["QCheckBox", "QRadioButton"];
const CHECKBOX: &[&str] = &["QCheckBox"];
const RADIO: &[&str] = &["QRadioButton"];
const SCROLLBAR: &[&str] = &["QScrollBar"];
const SCROLLBAR_STEPS: &[&str] = &["QScrollBar::add-line", "QScrollBar::sub-line"];
const ITEM_VIEWS: &[&str] = &["QTreeView", "QListView", "QTableView"];
const ITEMS: &[&str] = &["QTreeView", "QListView"];
const HEADER: &[&str] = &["QHeaderView"];
const TAB_WIDGET: &[&str] = &["QTabWidget"];
const TAB_BAR: &[&str] = &["QTabBar"];
const GROUP_BOX: &[&str] = &["QGroupBox"];
const PROGRESS: &[&str] = &["QProgressBar"];
const SLIDER: &[&str] = &["QSlider"];
const SPIN_BOX: &[&str] = &["QSpinBox", "QDoubleSpinBox"];
const TOOLTIP: &[&str] = &["QToolTip"];
const MENU: &[&str] = &["QMenu"];
const STATUS_BAR: &[&str] = &["QStatusBar"];
const WIDGET: &[&str] = &["QWidget"];
const WINDOWS: &[&str] = &["QMainWindow", "QDialog"];
/// Type names the card and badge adapters register with the host.
pub(crate) const CARD: &[&str] = &["RwCard"];
pub(crate) const BADGE: &[&str] = &["RwBadge"];

/// Collects rules in emission order.
pub(crate) struct Emitter<'a> {
    c: &'a ResolvedPalette,
    s: &'a Spacing,
    r: &'a Radius,
    t: &'a Typography,
    rules: Vec<StyleRule>,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(
        c: &'a ResolvedPalette,
        s: &'a Spacing,
        r: &'a Radius,
        t: &'a Typography,
    ) -> Self {
        Self {
            c,
            s,
            r,
            t,
            rules: Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> Vec<StyleRule> {
        self.rules
    }

    fn rule(&mut self, category: Category, selector: Selector, declarations: Vec<Declaration>) {
        self.rules.push(StyleRule {
            category,
            selector,
            declarations,
        });
    }

    /// The one disabled treatment every interactive category shares.
    fn disabled(&mut self, category: Category, elements: &'static [&'static str]) {
        let muted = self.c[TextMuted];
        self.rule(
            category,
            Selector::of(elements).state(State::Disabled),
            decls! {
                "opacity": DISABLED_OPACITY,
                "color": muted,
            },
        );
    }

    pub(crate) fn emit(&mut self, category: Category) {
        match category {
            Category::Global => self.global(),
            Category::Label => self.label(),
            Category::Button => self.button(),
            Category::TextInput => self.text_input(),
            Category::ComboBox => self.combo_box(),
            Category::CheckRadio => self.check_radio(),
            Category::ScrollBar => self.scroll_bar(),
            Category::ItemView => self.item_view(),
            Category::Tabs => self.tabs(),
            Category::GroupBox => self.group_box(),
            Category::ProgressBar => self.progress_bar(),
            Category::Slider => self.slider(),
            Category::SpinBox => self.spin_box(),
            Category::ToolTip => self.tool_tip(),
            Category::Menu => self.menu(),
            Category::StatusBar => self.status_bar(),
            Category::Card => self.card(),
            Category::Badge => self.badge(),
        }
    }

    fn global(&mut self) {
        let (c, t) = (self.c, self.t);
        self.rule(
            Category::Global,
            Selector::of(WIDGET),
            decls! {
                "font-family": t.font_family,
                "font-size": px(t.size_base),
                "color": c[Text],
                "background": "transparent",
            },
        );
        self.rule(
            Category::Global,
            Selector::of(WINDOWS),
            decls! { "background": c[Bg] },
        );
    }

    fn label(&mut self) {
        let c = self.c;
        let cat = Category::Label;
        self.rule(
            cat,
            Selector::of(LABEL),
            decls! {
                "color": c[Text],
                "background": "transparent",
                "padding": 0,
            },
        );
        self.rule(cat, Selector::of(LABEL).variant("muted"), decls! { "color": c[TextMuted] });
        self.rule(
            cat,
            Selector::of(LABEL).variant("secondary"),
            decls! { "color": c[TextSecondary] },
        );
        self.rule(cat, Selector::of(LABEL).variant("accent"), decls! { "color": c[Accent] });
    }

    fn button(&mut self) {
        let (c, s, r, t) = (self.c, self.s, self.r, self.t);
        let cat = Category::Button;
        self.rule(
            cat,
            Selector::of(BUTTON),
            decls! {
                "background": c[Surface],
                "color": c[Text],
                "border": solid("1px", c[Border]),
                "border-radius": px(r.md),
                "padding": px2(s.sm, s.lg),
                "font-weight": 600,
                "font-size": px(t.size_base),
                "min-height": "36px",
            },
        );
        self.rule(
            cat,
            Selector::of(BUTTON).state(State::Hover),
            decls! {
                "background": c[AccentBg],
                "border-color": c[Accent],
                "color": c[AccentText],
            },
        );
        self.rule(
            cat,
            Selector::of(BUTTON).state(State::Pressed),
            decls! { "background": c[AccentLight] },
        );

        self.rule(
            cat,
            Selector::of(BUTTON).variant("primary"),
            decls! {
                "background": c[Accent],
                "color": ON_ACCENT,
                "border": "none",
            },
        );
        self.rule(
            cat,
            Selector::of(BUTTON).variant("primary").state(State::Hover),
            decls! {
                "background": c[AccentDark],
                "color": ON_ACCENT,
            },
        );
        self.rule(
            cat,
            Selector::of(BUTTON).variant("danger"),
            decls! {
                "background": c[Danger],
                "color": ON_DANGER,
                "border": "none",
            },
        );
        self.rule(
            cat,
            Selector::of(BUTTON).variant("danger").state(State::Hover),
            decls! {
                "background": c[Danger],
                "color": ON_DANGER,
            },
        );
        self.rule(
            cat,
            Selector::of(BUTTON).variant("ghost"),
            decls! {
                "background": "transparent",
                "color": c[TextSecondary],
                "border": "none",
            },
        );
        self.rule(
            cat,
            Selector::of(BUTTON).variant("ghost").state(State::Hover),
            decls! {
                "background": c[SurfaceHover],
                "color": c[Text],
            },
        );
        // After the variants, which restate color at equal specificity.
        self.disabled(cat, BUTTON);
    }

    fn text_input(&mut self) {
        let (c, s, r, t) = (self.c, self.s, self.r, self.t);
        let cat = Category::TextInput;
        self.rule(
            cat,
            Selector::of(TEXT_INPUTS),
            decls! {
                "background": c[Bg],
                "color": c[Text],
                "border": solid("1.5px", c[Border]),
                "border-radius": px(r.md),
                "padding": px2(s.sm, s.md),
                "font-size": px(t.size_base),
                "selection-background-color": c[Accent],
                "selection-color": ON_ACCENT,
            },
        );
        self.rule(
            cat,
            Selector::of(TEXT_INPUTS).state(State::Focus),
            decls! { "border-color": c[Accent] },
        );
        self.disabled(cat, TEXT_INPUTS);
    }

    fn combo_box(&mut self) {
        let (c, s, r) = (self.c, self.s, self.r);
        let cat = Category::ComboBox;
        self.rule(
            cat,
            Selector::of(COMBO),
            decls! {
                "background": c[Bg],
                "color": c[Text],
                "border": solid("1.5px", c[Border]),
                "border-radius": px(r.md),
                "padding": px2(s.sm, s.md),
                "padding-right": px(s.xl),
                "min-height": "36px",
            },
        );
        self.rule(
            cat,
            Selector::of(COMBO).state(State::Focus),
            decls! { "border-color": c[Accent] },
        );
        self.rule(
            cat,
            Selector::of(COMBO).part("drop-down"),
            decls! {
                "border": "none",
                "width": px(s.lg),
            },
        );
        self.rule(
            cat,
            Selector::of(COMBO).part("down-arrow"),
            decls! {
                "image": "none",
                "border-left": "5px solid transparent",
                "border-right": "5px solid transparent",
                "border-top": solid("6px", c[TextMuted]),
            },
        );
        self.rule(
            cat,
            Selector::of(COMBO).descendant("QAbstractItemView"),
            decls! {
                "background": c[Surface],
                "color": c[Text],
                "border": solid("1px", c[Border]),
                "border-radius": px(r.sm),
                "selection-background-color": c[AccentBg],
                "selection-color": c[AccentText],
            },
        );
        self.disabled(cat, COMBO);
    }

    fn check_radio(&mut self) {
        let (c, s) = (self.c, self.s);
        let cat = Category::CheckRadio;
        self.rule(
            cat,
            Selector::of(CHECK_RADIO),
            decls! {
                "color": c[Text],
                "spacing": px(s.sm),
            },
        );
        for (elements, corner) in [(CHECKBOX, 6), (RADIO, 10)] {
            self.rule(
                cat,
                Selector::of(elements).part("indicator"),
                decls! {
                    "width": "20px",
                    "height": "20px",
                    "border": solid("1.5px", c[Border]),
                    "border-radius": px(corner),
                    "background": c[Bg],
                },
            );
            self.rule(
                cat,
                Selector::of(elements).part("indicator").state(State::Hover),
                decls! { "border-color": c[Accent] },
            );
            self.rule(
                cat,
                Selector::of(elements).part("indicator").state(State::Checked),
                decls! {
                    "background": c[Accent],
                    "border-color": c[Accent],
                },
            );
        }
        self.disabled(cat, CHECK_RADIO);
    }

    fn scroll_bar(&mut self) {
        let c = self.c;
        let cat = Category::ScrollBar;
        for (orientation, thickness, length) in [
            ("vertical", "width", "min-height"),
            ("horizontal", "height", "min-width"),
        ] {
            self.rule(
                cat,
                Selector::of(SCROLLBAR).pseudo(orientation),
                vec![
                    Declaration::new("background", "transparent"),
                    Declaration::new(thickness, "8px"),
                    Declaration::new("margin", 0),
                ],
            );
            self.rule(
                cat,
                Selector::of(SCROLLBAR).part("handle").pseudo(orientation),
                vec![
                    Declaration::new("background", c[Border]),
                    Declaration::new("border-radius", "4px"),
                    Declaration::new(length, "40px"),
                ],
            );
            self.rule(
                cat,
                Selector::of(SCROLLBAR)
                    .part("handle")
                    .pseudo(orientation)
                    .state(State::Hover),
                decls! { "background": c[TextMuted] },
            );
            // Arrow buttons collapse to nothing.
            let collapsed = if orientation == "vertical" { "height" } else { "width" };
            self.rule(
                cat,
                Selector::of(SCROLLBAR_STEPS).pseudo(orientation),
                vec![Declaration::new(collapsed, 0)],
            );
        }
    }

    fn item_view(&mut self) {
        let (c, s, r, t) = (self.c, self.s, self.r, self.t);
        let cat = Category::ItemView;
        self.rule(
            cat,
            Selector::of(ITEM_VIEWS),
            decls! {
                "background": c[Surface],
                "color": c[Text],
                "border": solid("1px", c[BorderLight]),
                "border-radius": px(r.md),
                "outline": "none",
            },
        );
        self.rule(
            cat,
            Selector::of(ITEMS).part("item"),
            decls! {
                "padding": px(s.sm),
                "border-radius": px(r.sm),
            },
        );
        self.rule(
            cat,
            Selector::of(ITEMS).part("item").state(State::Hover),
            decls! { "background": c[SurfaceHover] },
        );
        self.rule(
            cat,
            Selector::of(ITEMS).part("item").state(State::Selected),
            decls! {
                "background": c[AccentBg],
                "color": c[AccentText],
            },
        );
        self.rule(
            cat,
            Selector::of(HEADER).part("section"),
            decls! {
                "background": c[Surface],
                "color": c[TextMuted],
                "border": "none",
                "border-bottom": solid("1px", c[Border]),
                "padding": px2(s.sm, s.md),
                "font-weight": 600,
                "font-size": px(t.size_sm),
            },
        );
    }

    fn tabs(&mut self) {
        let (c, s, r) = (self.c, self.s, self.r);
        let cat = Category::Tabs;
        self.rule(
            cat,
            Selector::of(TAB_WIDGET).part("pane"),
            decls! {
                "border": solid("1px", c[Border]),
                "border-radius": px(r.md),
                "background": c[Surface],
            },
        );
        self.rule(
            cat,
            Selector::of(TAB_BAR).part("tab"),
            decls! {
                "background": "transparent",
                "color": c[TextMuted],
                "padding": px2(s.sm, s.lg),
                "border-bottom": "2px solid transparent",
                "font-weight": 500,
            },
        );
        self.rule(
            cat,
            Selector::of(TAB_BAR).part("tab").state(State::Hover),
            decls! { "color": c[Text] },
        );
        self.rule(
            cat,
            Selector::of(TAB_BAR).part("tab").state(State::Selected),
            decls! {
                "color": c[Accent],
                "border-bottom-color": c[Accent],
            },
        );
    }

    fn group_box(&mut self) {
        let (c, s, r) = (self.c, self.s, self.r);
        let cat = Category::GroupBox;
        self.rule(
            cat,
            Selector::of(GROUP_BOX),
            decls! {
                "background": c[Surface],
                "border": solid("1px", c[BorderLight]),
                "border-radius": px(r.lg),
                "padding": px(s.lg),
                "padding-top": px(s.xl),
                "margin-top": px(s.md),
            },
        );
        self.rule(
            cat,
            Selector::of(GROUP_BOX).part("title"),
            decls! {
                "color": c[Text],
                "font-weight": 700,
                "subcontrol-origin": "margin",
                "subcontrol-position": "top left",
                "padding": format!("0 {}px", s.sm),
                "left": px(s.md),
            },
        );
    }

    fn progress_bar(&mut self) {
        let (c, r) = (self.c, self.r);
        let cat = Category::ProgressBar;
        self.rule(
            cat,
            Selector::of(PROGRESS),
            decls! {
                "background": c[Surface],
                "border": "none",
                "border-radius": px(r.sm),
                "height": "8px",
                "text-align": "center",
            },
        );
        self.rule(
            cat,
            Selector::of(PROGRESS).part("chunk"),
            decls! {
                "background": c[Accent],
                "border-radius": px(r.sm),
            },
        );
    }

    fn slider(&mut self) {
        let c = self.c;
        let cat = Category::Slider;
        self.rule(
            cat,
            Selector::of(SLIDER).part("groove").pseudo("horizontal"),
            decls! {
                "background": c[Border],
                "height": "4px",
                "border-radius": "2px",
            },
        );
        self.rule(
            cat,
            Selector::of(SLIDER).part("handle").pseudo("horizontal"),
            decls! {
                "background": c[Accent],
                "width": "16px",
                "height": "16px",
                "margin": "-6px 0",
                "border-radius": "8px",
            },
        );
        self.rule(
            cat,
            Selector::of(SLIDER)
                .part("handle")
                .pseudo("horizontal")
                .state(State::Hover),
            decls! { "background": c[AccentDark] },
        );
        self.disabled(cat, SLIDER);
    }

    fn spin_box(&mut self) {
        let (c, s, r) = (self.c, self.s, self.r);
        let cat = Category::SpinBox;
        self.rule(
            cat,
            Selector::of(SPIN_BOX),
            decls! {
                "background": c[Bg],
                "color": c[Text],
                "border": solid("1.5px", c[Border]),
                "border-radius": px(r.md),
                "padding": px(s.sm),
            },
        );
        self.rule(
            cat,
            Selector::of(SPIN_BOX).state(State::Focus),
            decls! { "border-color": c[Accent] },
        );
        self.disabled(cat, SPIN_BOX);
    }

    fn tool_tip(&mut self) {
        let (c, s, r) = (self.c, self.s, self.r);
        self.rule(
            Category::ToolTip,
            Selector::of(TOOLTIP),
            decls! {
                "background": c[SurfaceElevated],
                "color": c[Text],
                "border": solid("1px", c[Border]),
                "border-radius": px(r.sm),
                "padding": px2(s.sm, s.md),
            },
        );
    }

    fn menu(&mut self) {
        let (c, s, r) = (self.c, self.s, self.r);
        let cat = Category::Menu;
        self.rule(
            cat,
            Selector::of(MENU),
            decls! {
                "background": c[Surface],
                "border": solid("1px", c[Border]),
                "border-radius": px(r.md),
                "padding": px(s.xs),
            },
        );
        self.rule(
            cat,
            Selector::of(MENU).part("item"),
            decls! {
                "padding": px2(s.sm, s.lg),
                "border-radius": px(r.sm),
            },
        );
        self.rule(
            cat,
            Selector::of(MENU).part("item").state(State::Selected),
            decls! {
                "background": c[AccentBg],
                "color": c[AccentText],
            },
        );
        self.rule(
            cat,
            Selector::of(MENU).part("separator"),
            decls! {
                "height": "1px",
                "background": c[BorderLight],
                "margin": px2(s.xs, s.sm),
            },
        );
    }

    fn status_bar(&mut self) {
        let c = self.c;
        self.rule(
            Category::StatusBar,
            Selector::of(STATUS_BAR),
            decls! {
                "background": c[Surface],
                "color": c[TextSecondary],
                "border-top": solid("1px", c[BorderLight]),
            },
        );
    }

    fn card(&mut self) {
        let (c, s, r) = (self.c, self.s, self.r);
        let cat = Category::Card;
        self.rule(
            cat,
            Selector::of(CARD),
            decls! {
                "background": c[Surface],
                "border": solid("1px", c[BorderLight]),
                "border-radius": px(r.lg),
                "padding": px(s.lg),
            },
        );
        self.rule(
            cat,
            Selector::of(CARD).variant("elevated"),
            decls! {
                "background": c[SurfaceElevated],
                "border": "none",
            },
        );
        self.rule(
            cat,
            Selector::of(CARD).variant("interactive"),
            decls! { "border": solid("1px", c[Border]) },
        );
        self.rule(
            cat,
            Selector::of(CARD).variant("interactive").state(State::Hover),
            decls! {
                "background": c[SurfaceHover],
                "border-color": c[Accent],
            },
        );
    }

    fn badge(&mut self) {
        let (c, s, r, t) = (self.c, self.s, self.r, self.t);
        let cat = Category::Badge;
        self.rule(
            cat,
            Selector::of(BADGE),
            decls! {
                "background": c[Surface],
                "color": c[TextSecondary],
                "border": solid("1px", c[BorderLight]),
                "border-radius": px(r.full),
                "padding": px2(s.xs, s.sm + s.xs),
                "font-size": px(t.size_xs),
                "font-weight": 600,
            },
        );
        self.rule(
            cat,
            Selector::of(BADGE).variant("accent"),
            decls! {
                "background": c[AccentBg],
                "color": c[AccentText],
                "border-color": c[AccentLight],
            },
        );
        for (tag, fg, bg) in [
            ("success", Success, SuccessBg),
            ("danger", Danger, DangerBg),
            ("warning", Warning, WarningBg),
            ("info", Info, InfoBg),
        ] {
            self.rule(
                cat,
                Selector::of(BADGE).variant(tag),
                decls! {
                    "background": c[bg],
                    "color": c[fg],
                    "border-color": "transparent",
                },
            );
        }
    }
}
