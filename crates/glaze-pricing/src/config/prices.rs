//! Unit prices and the versioned price table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::breakdown::Component;
use crate::catalog::{ColourBucket, ProfileColour};
use crate::config::glass::GlassSelection;
use crate::error::PricingError;

/// Unit price of every physical component, in major currency units.
///
/// Profiles and sealing are priced per metre, glass per m², hardware per
/// piece and silicone per tube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPrices {
    // Outer frame
    pub jamb_p: Decimal,
    pub header_p: Decimal,
    pub sill_p: Decimal,
    pub tube: Decimal,
    // Inner frame
    pub inter_lock: Decimal,
    pub lock_section: Decimal,
    pub top_bottom: Decimal,
    pub divider: Decimal,
    // Glazing beads and covers
    pub butter_fly: Decimal,
    pub jamb_cover: Decimal,
    pub single_header: Decimal,
    // Projected windows
    pub p_outter: Decimal,
    pub p_inner: Decimal,
    pub p_inner_div: Decimal,
    pub project_bidding: Decimal,
    // Curtain walling
    pub curtain_walling_p: Decimal,
    pub curtain_walling_p_inner: Decimal,
    // Folding
    pub folding_top_rail_p: Decimal,
    pub folding_bottom_track_p: Decimal,
    pub folding_sash_p: Decimal,
    pub folding_beading: Decimal,
    pub folding_outter_frame_p: Decimal,
    // Hardware
    pub rollers: Decimal,
    pub lock: Decimal,
    pub guiders: Decimal,
    pub side_arms: Decimal,
    pub project_handle: Decimal,
    pub folding_rollers: Decimal,
    pub folding_lock: Decimal,
    pub folding_guiders: Decimal,
    pub folding_hinges: Decimal,
    // Glass and sealing
    pub glass: Decimal,
    pub rubber: Decimal,
    pub wool_file: Decimal,
    pub double_tape: Decimal,
    pub silicone: Decimal,
    pub folding_rubber: Decimal,
    // Installation
    pub install_pc: Decimal,
    pub install_base: Decimal,
}

impl Default for UnitPrices {
    fn default() -> Self {
        let p = |v: i64| Decimal::from(v);
        Self {
            jamb_p: p(600),
            header_p: p(600),
            sill_p: p(600),
            tube: p(600),
            inter_lock: p(550),
            lock_section: p(550),
            top_bottom: p(550),
            divider: p(480),
            butter_fly: p(550),
            jamb_cover: p(300),
            single_header: p(400),
            p_outter: p(570),
            p_inner: p(570),
            p_inner_div: p(580),
            project_bidding: p(340),
            curtain_walling_p: p(870),
            curtain_walling_p_inner: p(750),
            folding_top_rail_p: p(2812),
            folding_bottom_track_p: p(950),
            folding_sash_p: p(1240),
            folding_beading: p(510),
            folding_outter_frame_p: p(510),
            rollers: p(200),
            lock: p(950),
            guiders: p(49),
            side_arms: p(840),
            project_handle: p(600),
            folding_rollers: p(4000),
            folding_lock: p(3000),
            folding_guiders: p(2000),
            folding_hinges: p(800),
            glass: p(130),
            rubber: p(70),
            wool_file: p(100),
            double_tape: p(60),
            silicone: p(400),
            folding_rubber: p(100),
            install_pc: Decimal::new(285, 3),
            install_base: p(1000),
        }
    }
}

/// Frame prices for one colour bucket.
struct BucketPrices {
    outer_frame: i64,
    inner_frame: i64,
    butter_fly: i64,
    jamb_cover: i64,
    p_inner: i64,
    p_inner_div: i64,
    p_outter: i64,
    project_bidding: i64,
    single_header: i64,
    curtain_walling: i64,
}

impl ColourBucket {
    fn prices(&self) -> BucketPrices {
        match self {
            ColourBucket::Light => BucketPrices {
                outer_frame: 600,
                inner_frame: 550,
                butter_fly: 550,
                jamb_cover: 300,
                p_inner: 570,
                p_inner_div: 580,
                p_outter: 570,
                project_bidding: 370,
                single_header: 400,
                curtain_walling: 890,
            },
            ColourBucket::Dark => BucketPrices {
                outer_frame: 620,
                inner_frame: 570,
                butter_fly: 560,
                jamb_cover: 320,
                p_inner: 580,
                p_inner_div: 590,
                p_outter: 580,
                project_bidding: 390,
                single_header: 420,
                curtain_walling: 920,
            },
        }
    }
}

impl UnitPrices {
    /// Set every frame profile price from a colour bucket.
    pub fn apply_bucket(&mut self, bucket: ColourBucket) {
        let b = bucket.prices();
        let p = |v: i64| Decimal::from(v);

        self.jamb_p = p(b.outer_frame);
        self.header_p = p(b.outer_frame);
        self.sill_p = p(b.outer_frame);
        self.tube = p(b.outer_frame);

        self.inter_lock = p(b.inner_frame);
        self.lock_section = p(b.inner_frame);
        self.top_bottom = p(b.inner_frame);
        self.divider = p(b.inner_frame);

        self.butter_fly = p(b.butter_fly);
        self.jamb_cover = p(b.jamb_cover);
        self.p_inner = p(b.p_inner);
        self.p_inner_div = p(b.p_inner_div);
        self.p_outter = p(b.p_outter);
        self.project_bidding = p(b.project_bidding);
        self.single_header = p(b.single_header);
        self.curtain_walling_p = p(b.curtain_walling);
        self.curtain_walling_p_inner = p(b.curtain_walling);
    }

    /// Unit price for a component.
    pub fn unit_price(&self, component: Component) -> Decimal {
        use Component::*;

        match component {
            JambP => self.jamb_p,
            HeaderP => self.header_p,
            SillP => self.sill_p,
            Tube => self.tube,
            InterLock => self.inter_lock,
            LockSection => self.lock_section,
            TopBottom => self.top_bottom,
            Divider => self.divider,
            ButterFly => self.butter_fly,
            JambCover => self.jamb_cover,
            SingleHeader => self.single_header,
            POutter => self.p_outter,
            PInner => self.p_inner,
            PInnerDiv => self.p_inner_div,
            ProjectBidding => self.project_bidding,
            CurtainWallingP => self.curtain_walling_p,
            CurtainWallingPInner => self.curtain_walling_p_inner,
            FoldingTopRailP => self.folding_top_rail_p,
            FoldingBottomTrackP => self.folding_bottom_track_p,
            FoldingSashP => self.folding_sash_p,
            FoldingBeading => self.folding_beading,
            FoldingOutterFrameP => self.folding_outter_frame_p,
            Rollers => self.rollers,
            Lock => self.lock,
            Guiders => self.guiders,
            SideArms => self.side_arms,
            ProjectHandle => self.project_handle,
            FoldingRollers => self.folding_rollers,
            FoldingLock => self.folding_lock,
            FoldingGuiders => self.folding_guiders,
            FoldingHinges => self.folding_hinges,
            Glass => self.glass,
            Rubber => self.rubber,
            WoolFile => self.wool_file,
            DoubleTape => self.double_tape,
            Silicone => self.silicone,
            FoldingRubber => self.folding_rubber,
        }
    }
}

/// A coherent, versioned set of unit prices.
///
/// Tables are never edited in place: every update produces a new table with
/// the next version number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTable {
    /// Monotonic version, bumped on every update.
    pub version: u64,
    /// Colour whose bucket was last applied.
    pub profile_colour: Option<ProfileColour>,
    /// Glass whose price was last applied.
    pub glass: Option<GlassSelection>,
    /// Unit prices.
    pub prices: UnitPrices,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            version: 0,
            profile_colour: None,
            glass: None,
            prices: UnitPrices::default(),
        }
    }
}

impl PriceTable {
    /// Next version with a colour bucket applied.
    pub fn with_profile(&self, colour: ProfileColour) -> PriceTable {
        let mut next = self.clone();
        next.prices.apply_bucket(colour.bucket());
        next.profile_colour = Some(colour);
        next.version = self.version + 1;
        next
    }

    /// Next version with only the glass price replaced.
    pub fn with_glass(&self, glass: GlassSelection) -> PriceTable {
        let mut next = self.clone();
        next.prices.glass = glass.unit_price();
        next.glass = Some(glass);
        next.version = self.version + 1;
        next
    }

    /// Derive a calculation snapshot for one request's own selection.
    ///
    /// The result keeps this table's version; it is a view, not an update.
    pub fn for_selection(&self, colour: ProfileColour, glass: GlassSelection) -> PriceTable {
        let mut snapshot = self.clone();
        snapshot.prices.apply_bucket(colour.bucket());
        snapshot.prices.glass = glass.unit_price();
        snapshot.profile_colour = Some(colour);
        snapshot.glass = Some(glass);
        snapshot
    }

    /// Unit price for a component.
    pub fn unit_price(&self, component: Component) -> Decimal {
        self.prices.unit_price(component)
    }

    /// Glass unit price for a type/thickness pair by wire name.
    pub fn glass_price_for(glass_type: &str, thickness: &str) -> Result<Decimal, PricingError> {
        GlassSelection::parse(glass_type, thickness).map(|g| g.unit_price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GlassThickness, GlassType};

    #[test]
    fn test_defaults() {
        let prices = UnitPrices::default();
        assert_eq!(prices.glass, Decimal::from(130));
        assert_eq!(prices.install_pc, Decimal::new(285, 3));
        assert_eq!(prices.unit_price(Component::FoldingTopRailP), Decimal::from(2812));
    }

    #[test]
    fn test_dark_bucket() {
        let table = PriceTable::default().with_profile(ProfileColour::Champagne);
        assert_eq!(table.version, 1);
        assert_eq!(table.prices.jamb_p, Decimal::from(620));
        assert_eq!(table.prices.tube, Decimal::from(620));
        assert_eq!(table.prices.divider, Decimal::from(570));
        assert_eq!(table.prices.curtain_walling_p_inner, Decimal::from(920));
        // Hardware is not bucketed.
        assert_eq!(table.prices.lock, Decimal::from(950));
    }

    #[test]
    fn test_light_bucket_colours_agree() {
        let base = PriceTable::default();
        let white = base.with_profile(ProfileColour::White).prices;
        let silver = base.with_profile(ProfileColour::Silver).prices;
        let brown = base.with_profile(ProfileColour::Brown).prices;
        assert_eq!(white, silver);
        assert_eq!(white, brown);
        assert_eq!(white.project_bidding, Decimal::from(370));
    }

    #[test]
    fn test_glass_update_only_touches_glass() {
        let base = PriceTable::default().with_profile(ProfileColour::Black);
        let glass = GlassSelection::new(GlassType::Tinted, GlassThickness::Toughened10).unwrap();
        let next = base.with_glass(glass);

        assert_eq!(next.version, 2);
        assert_eq!(next.prices.glass, Decimal::from(570));
        assert_eq!(next.profile_colour, Some(ProfileColour::Black));

        let mut expected = base.prices.clone();
        expected.glass = Decimal::from(570);
        assert_eq!(next.prices, expected);
    }

    #[test]
    fn test_for_selection_keeps_version() {
        let base = PriceTable::default();
        let glass = GlassSelection::new(GlassType::Clear, GlassThickness::Mm6).unwrap();
        let snapshot = base.for_selection(ProfileColour::White, glass);
        assert_eq!(snapshot.version, base.version);
        assert_eq!(snapshot.prices.glass, Decimal::from(180));
        assert_eq!(base.prices.glass, Decimal::from(130));
    }

    #[test]
    fn test_table_serializes_camel_case() {
        let json = serde_json::to_value(PriceTable::default()).unwrap();
        assert!(json["prices"].get("jambP").is_some());
        assert!(json["prices"].get("curtainWallingPInner").is_some());
        assert!(json["prices"].get("installPc").is_some());
    }

    #[test]
    fn test_prices_serialize_exactly() {
        let json = serde_json::to_value(PriceTable::default()).unwrap();
        assert_eq!(json["prices"]["glass"], "130");

        let table: PriceTable = serde_json::from_value(json).unwrap();
        assert_eq!(table, PriceTable::default());
    }
}
