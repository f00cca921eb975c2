//! Declarative description of how the host shell presents and launches the app.
//!
//! Styles are typed here and serialized to the CSS-like key/value maps the
//! shell consumes.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Name displayed by the shell.
pub const DISPLAY_NAME: &str = "vs-flow-notebook";

/// Asset kind this application opens.
pub const NOTEBOOK_KIND: &str = "vsf-notebook";

const ASSETS_DIR: &str =
    "/api/assets-gateway/raw/package/QHlvdXdvbC92c2Ytbm90ZWJvb2s=/0.1.2/assets";

const DROP_SHADOW: &str = "drop-shadow(rgb(0, 0, 0) 1px 3px 5px)";
const BACKGROUND_REPEAT: &str = "no-repeat";
const BACKGROUND_POSITION: &str = "center center";
const BACKGROUND_CLASS: &str = "h-100 w-100";
const BACKGROUND_OPACITY: f64 = 0.3;

/// CSS `url(...)` reference of the application icon.
pub fn app_icon_url() -> String {
    format!("url('{}/vsf_flow_app.svg')", ASSETS_DIR)
}

/// CSS `url(...)` reference of the notebook file icon.
pub fn file_icon_url() -> String {
    format!("url('{}/vsf_flow_file.svg')", ASSETS_DIR)
}

/// `background-size` mode of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundSize {
    #[default]
    Cover,
    Contain,
}

impl BackgroundSize {
    pub fn css(self) -> &'static str {
        match self {
            BackgroundSize::Cover => "cover",
            BackgroundSize::Contain => "contain",
        }
    }
}

/// Square icon with a rounded border and drop shadow.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub size: String,
    pub border_radius: String,
    pub image: String,
    pub background_size: BackgroundSize,
}

/// Build an icon style; `background_size` falls back to `cover`.
pub fn icon(
    size: &str,
    border_radius: &str,
    image: &str,
    background_size: Option<BackgroundSize>,
) -> IconStyle {
    IconStyle {
        size: size.to_string(),
        border_radius: border_radius.to_string(),
        image: image.to_string(),
        background_size: background_size.unwrap_or_default(),
    }
}

impl IconStyle {
    /// The CSS key/value map of this icon.
    pub fn style_map(&self) -> IndexMap<&'static str, String> {
        IndexMap::from([
            ("width", self.size.clone()),
            ("height", self.size.clone()),
            ("background-image", self.image.clone()),
            ("background-size", self.background_size.css().to_string()),
            ("background-repeat", BACKGROUND_REPEAT.to_string()),
            ("background-position", BACKGROUND_POSITION.to_string()),
            ("filter", DROP_SHADOW.to_string()),
            ("border-radius", self.border_radius.clone()),
        ])
    }
}

impl Serialize for IconStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("style", &self.style_map())?;
        map.end()
    }
}

/// Faded full-size background image.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundStyle {
    pub opacity: f64,
    pub image: String,
}

#[derive(Serialize)]
struct BackgroundCss<'a> {
    opacity: f64,
    #[serde(rename = "background-image")]
    background_image: &'a str,
    #[serde(rename = "background-size")]
    background_size: &'static str,
    #[serde(rename = "background-repeat")]
    background_repeat: &'static str,
    #[serde(rename = "background-position")]
    background_position: &'static str,
    filter: &'static str,
}

impl Serialize for BackgroundStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let css = BackgroundCss {
            opacity: self.opacity,
            background_image: &self.image,
            background_size: BackgroundSize::Cover.css(),
            background_repeat: BACKGROUND_REPEAT,
            background_position: BACKGROUND_POSITION,
            filter: DROP_SHADOW,
        };
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("class", BACKGROUND_CLASS)?;
        map.serialize_entry("style", &css)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Graphics {
    pub app_icon: IconStyle,
    pub file_icon: IconStyle,
    pub background: BackgroundStyle,
}

/// Rule telling the shell which content kinds the app opens, and how
/// content attributes become launch parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenWithRule {
    #[serde(rename = "match")]
    pub matches: IndexMap<String, String>,
    pub parameters: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Execution {
    pub standalone: bool,
    pub parametrized: Vec<OpenWithRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

impl Link {
    fn new(name: &str, url: &str) -> Self {
        Self { name: name.to_string(), url: url.to_string() }
    }
}

/// Presentation and launch description of the browser application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDescriptor {
    pub display_name: String,
    pub graphics: Graphics,
    pub execution: Execution,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishConfig {
    pub packaged_folders: Vec<String>,
}

/// Configuration handed to the packaging pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    pub target: AppDescriptor,
    pub publish_config: PublishConfig,
}

impl AppDescriptor {
    /// Build the descriptor. Always the same value; nothing is read from the environment.
    pub fn build() -> Self {
        let app_icon = app_icon_url();
        let file_icon = file_icon_url();

        Self {
            display_name: DISPLAY_NAME.to_string(),
            graphics: Graphics {
                app_icon: icon("100%", "15%", &app_icon, None),
                file_icon: icon("100%", "15%", &file_icon, Some(BackgroundSize::Contain)),
                background: BackgroundStyle { opacity: BACKGROUND_OPACITY, image: app_icon },
            },
            execution: Execution {
                standalone: true,
                parametrized: vec![OpenWithRule {
                    matches: IndexMap::from([("kind".to_string(), NOTEBOOK_KIND.to_string())]),
                    parameters: IndexMap::from([("id".to_string(), "assetId".to_string())]),
                }],
            },
            links: vec![
                Link::new("doc", "dist/docs/index.html"),
                Link::new("coverage", "coverage/lcov-report/index.html"),
                Link::new("bundle-analysis", "dist/bundle-analysis.html"),
            ],
        }
    }
}

impl PipelineConfig {
    /// Descriptor plus publish settings: only `assets` is packaged.
    pub fn build() -> Self {
        Self {
            target: AppDescriptor::build(),
            publish_config: PublishConfig { packaged_folders: vec!["assets".to_string()] },
        }
    }
}
