use serde::{Deserialize, Serialize};

// Vec3

/// A plain 3-component vector for grid geometry settings.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

// Color

/// RGBA tint applied to a whole tile layer.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// The layout of the cells in the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CellLayout {
    Rectangle,
    Hexagon,
    Isometric,
    IsometricZAsY,
}

/// Which axis order cell coordinates are interpreted in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CellSwizzle {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

/// The plane tiles are oriented in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TileOrientation {
    Xy,
    Xz,
    Yx,
    Yz,
    Zx,
    Zy,
}

// GridSetting

/// One scalar configuration value of the grid, replicated whole.
///
/// These change rarely, so they travel as full replacement values instead of
/// through the operation stream. Per-setting last-write-wins follows from the
/// channel's ordering guarantee.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum GridSetting {
    CellSize(Vec3),
    CellGap(Vec3),
    CellLayout(CellLayout),
    CellSwizzle(CellSwizzle),
    AnimationFrameRate(f32),
    Color(Color),
    TileAnchor(Vec3),
    Orientation(TileOrientation),
}

impl GridSetting {
    /// Name of the setting, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            GridSetting::CellSize(_) => "CellSize",
            GridSetting::CellGap(_) => "CellGap",
            GridSetting::CellLayout(_) => "CellLayout",
            GridSetting::CellSwizzle(_) => "CellSwizzle",
            GridSetting::AnimationFrameRate(_) => "AnimationFrameRate",
            GridSetting::Color(_) => "Color",
            GridSetting::TileAnchor(_) => "TileAnchor",
            GridSetting::Orientation(_) => "Orientation",
        }
    }
}

// GridSettings

/// The authority's current value for every grid setting.
///
/// Kept so a snapshot can carry the full scalar state to late-joining
/// observers.
#[derive(Clone, PartialEq, Debug)]
pub struct GridSettings {
    pub cell_size: Vec3,
    pub cell_gap: Vec3,
    pub cell_layout: CellLayout,
    pub cell_swizzle: CellSwizzle,
    pub animation_frame_rate: f32,
    pub color: Color,
    pub tile_anchor: Vec3,
    pub orientation: TileOrientation,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            cell_size: Vec3::new(1.0, 1.0, 0.0),
            cell_gap: Vec3::ZERO,
            cell_layout: CellLayout::Rectangle,
            cell_swizzle: CellSwizzle::Xyz,
            animation_frame_rate: 1.0,
            color: Color::WHITE,
            tile_anchor: Vec3::new(0.5, 0.5, 0.0),
            orientation: TileOrientation::Xy,
        }
    }
}

impl GridSettings {
    /// Folds a single replicated value into the aggregate.
    pub fn apply(&mut self, setting: &GridSetting) {
        match *setting {
            GridSetting::CellSize(value) => self.cell_size = value,
            GridSetting::CellGap(value) => self.cell_gap = value,
            GridSetting::CellLayout(value) => self.cell_layout = value,
            GridSetting::CellSwizzle(value) => self.cell_swizzle = value,
            GridSetting::AnimationFrameRate(value) => self.animation_frame_rate = value,
            GridSetting::Color(value) => self.color = value,
            GridSetting::TileAnchor(value) => self.tile_anchor = value,
            GridSetting::Orientation(value) => self.orientation = value,
        }
    }

    /// All current values, in a stable order, for snapshot delivery.
    pub fn all(&self) -> Vec<GridSetting> {
        vec![
            GridSetting::CellSize(self.cell_size),
            GridSetting::CellGap(self.cell_gap),
            GridSetting::CellLayout(self.cell_layout),
            GridSetting::CellSwizzle(self.cell_swizzle),
            GridSetting::AnimationFrameRate(self.animation_frame_rate),
            GridSetting::Color(self.color),
            GridSetting::TileAnchor(self.tile_anchor),
            GridSetting::Orientation(self.orientation),
        ]
    }
}
