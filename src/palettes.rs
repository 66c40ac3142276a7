// Control points are those of the `colormap` npm package scales.

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

lazy_static! {
  pub(crate) static ref JET: PaletteData = PaletteData::new(
    "jet", PaletteType::Seq,
    &[(0.,    [0, 0, 131]),
      (0.125, [0, 60, 170]),
      (0.375, [5, 255, 255]),
      (0.625, [255, 255, 0]),
      (0.875, [250, 0, 0]),
      (1.,    [128, 0, 0])]);

  pub(crate) static ref HOT: PaletteData = PaletteData::new(
    "hot", PaletteType::Seq,
    &[(0.,  [0, 0, 0]),
      (0.3, [230, 0, 0]),
      (0.6, [255, 210, 0]),
      (1.,  [255, 255, 255])]);

  pub(crate) static ref COOL: PaletteData = PaletteData::new(
    "cool", PaletteType::Seq,
    &[(0., [0, 255, 255]),
      (1., [255, 0, 255])]);

  pub(crate) static ref GREYS: PaletteData = PaletteData::new(
    "greys", PaletteType::Seq,
    &[(0., [0, 0, 0]),
      (1., [255, 255, 255])]);

  pub(crate) static ref BLUERED: PaletteData = PaletteData::new(
    "bluered", PaletteType::Div,
    &[(0., [0, 0, 255]),
      (1., [255, 0, 0])]);

  pub(crate) static ref RDBU: PaletteData = PaletteData::new(
    "RdBu", PaletteType::Div,
    &[(0.,   [5, 10, 172]),
      (0.35, [106, 137, 247]),
      (0.5,  [190, 190, 190]),
      (0.6,  [220, 170, 132]),
      (0.7,  [230, 145, 90]),
      (1.,   [178, 10, 28])]);

  pub(crate) static ref YLGNBU: PaletteData = PaletteData::new(
    "YlGnBu", PaletteType::Seq,
    &[(0.,    [8, 29, 88]),
      (0.125, [37, 52, 148]),
      (0.25,  [34, 94, 168]),
      (0.375, [29, 145, 192]),
      (0.5,   [65, 182, 196]),
      (0.625, [127, 205, 187]),
      (0.75,  [199, 233, 180]),
      (0.875, [237, 248, 217]),
      (1.,    [255, 255, 217])]);

  pub(crate) static ref YLORRD: PaletteData = PaletteData::new(
    "YlOrRd", PaletteType::Seq,
    &[(0.,    [128, 0, 38]),
      (0.125, [189, 0, 38]),
      (0.25,  [227, 26, 28]),
      (0.375, [252, 78, 42]),
      (0.5,   [253, 141, 60]),
      (0.625, [254, 178, 76]),
      (0.75,  [254, 217, 118]),
      (0.875, [255, 237, 160]),
      (1.,    [255, 255, 204])]);

  pub(crate) static ref PICNIC: PaletteData = PaletteData::new(
    "picnic", PaletteType::Div,
    &[(0.,  [0, 0, 255]),
      (0.1, [51, 153, 255]),
      (0.2, [102, 204, 255]),
      (0.3, [153, 204, 255]),
      (0.4, [204, 204, 255]),
      (0.5, [255, 255, 255]),
      (0.6, [255, 204, 255]),
      (0.7, [255, 153, 255]),
      (0.8, [255, 102, 204]),
      (0.9, [255, 102, 102]),
      (1.,  [255, 0, 0])]);

  pub(crate) static ref PORTLAND: PaletteData = PaletteData::new(
    "portland", PaletteType::Div,
    &[(0.,   [12, 51, 131]),
      (0.25, [10, 136, 186]),
      (0.5,  [242, 211, 56]),
      (0.75, [242, 143, 56]),
      (1.,   [217, 30, 30])]);

  pub(crate) static ref BLACKBODY: PaletteData = PaletteData::new(
    "blackbody", PaletteType::Seq,
    &[(0.,  [0, 0, 0]),
      (0.2, [230, 0, 0]),
      (0.4, [230, 210, 0]),
      (0.7, [255, 255, 255]),
      (1.,  [160, 200, 255])]);

  pub(crate) static ref ELECTRIC: PaletteData = PaletteData::new(
    "electric", PaletteType::Seq,
    &[(0.,   [0, 0, 0]),
      (0.15, [30, 0, 100]),
      (0.4,  [120, 0, 100]),
      (0.6,  [160, 90, 0]),
      (0.8,  [230, 200, 0]),
      (1.,   [255, 250, 220])]);

  pub(crate) static ref VIRIDIS: PaletteData = PaletteData::new(
    "viridis", PaletteType::Seq,
    &[(0.,   [68, 1, 84]),
      (0.13, [71, 44, 122]),
      (0.25, [59, 81, 139]),
      (0.38, [44, 113, 142]),
      (0.5,  [33, 144, 141]),
      (0.63, [39, 173, 129]),
      (0.75, [92, 200, 99]),
      (0.88, [170, 220, 50]),
      (1.,   [253, 231, 37])]);

  pub(crate) static ref ALL_PALETTES: [&'static PaletteData; 13] = [
    &*JET, &*HOT, &*COOL, &*GREYS, &*BLUERED, &*RDBU, &*YLGNBU,
    &*YLORRD, &*PICNIC, &*PORTLAND, &*BLACKBODY, &*ELECTRIC, &*VIRIDIS];
}
