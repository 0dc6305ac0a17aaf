//! Game cache ids referenced by the catalog.
//!
//! Item ids identify the physical clue scrolls, object ids the scenery a
//! marker can anchor to, and varbit ids the flags behind state-dependent
//! attributes. If the game cache renumbers, this is the only place to touch.

/// Clue scroll item ids, one per riddle that has its own scroll.
///
/// Beginner and master scrolls reuse a single item per tier, so their
/// records carry no item id and are matched by text instead.
pub mod item {
    pub const MEDIUM_A_BAKER: i32 = 2801;
    pub const MEDIUM_A_BASIC_ANTI_POT: i32 = 2803;
    pub const MEDIUM_A_HEART: i32 = 2805;
    pub const MEDIUM_AHA_JAR: i32 = 2807;
    pub const MEDIUM_ARC_O_LINE: i32 = 2809;
    pub const MEDIUM_ARE_COL: i32 = 2811;
    pub const MEDIUM_ARMCHAIR_THE_PELT: i32 = 2813;
    pub const MEDIUM_A_BAS: i32 = 2815;
    pub const MEDIUM_AREA_CHEF_TREK: i32 = 2817;
    pub const MEDIUM_BAIL_TRIMS: i32 = 2819;
    pub const MEDIUM_CALAMARI_MADE_MUD: i32 = 2821;
    pub const MEDIUM_CLASH_ION: i32 = 2823;
    pub const MEDIUM_DT_RUN_B: i32 = 2825;
    pub const MEDIUM_EEK_ZERO_OP: i32 = 2827;
    pub const MEDIUM_EL_OW: i32 = 2829;
    pub const MEDIUM_GOBLIN_KERN: i32 = 2831;
    pub const MEDIUM_GOT_A_BOY: i32 = 2833;
    pub const MEDIUM_GOBLETS_ODD_TOES: i32 = 2835;
    pub const MEDIUM_HALT_US: i32 = 2837;
    pub const MEDIUM_HEORIC: i32 = 2839;
    pub const MEDIUM_HIS_PHOR: i32 = 2841;
    pub const MEDIUM_I_AM_SIR: i32 = 2843;
    pub const MEDIUM_ICY_FE: i32 = 2845;
    pub const MEDIUM_I_DOOM_ICON_INN: i32 = 2847;
    /// The scroll whose text flips between "I EVEN" and "VESTE".
    pub const MEDIUM_SLAYER_MASTER: i32 = 2849;
    pub const MEDIUM_KAY_SIR: i32 = 2851;
    pub const MEDIUM_LEAKEY: i32 = 2853;
    pub const MEDIUM_LARK_IN_DOG: i32 = 2855;
    pub const MEDIUM_LOW_LAG: i32 = 2857;
    pub const MEDIUM_ME_IF: i32 = 2859;
    pub const MEDIUM_NOD_MED: i32 = 2861;
    pub const MEDIUM_OK_CO: i32 = 2863;
    pub const MEDIUM_PACINNG_A_TAIE: i32 = 2865;
    pub const MEDIUM_PEAK_REFLEX: i32 = 2867;
    pub const MEDIUM_PEATY_PERT: i32 = 2869;
    pub const MEDIUM_QUE_SIR: i32 = 2871;
    pub const MEDIUM_R_AK_MI: i32 = 2873;
    pub const MEDIUM_RATAI: i32 = 2875;
    pub const MEDIUM_R_SLICER: i32 = 2877;
    pub const MEDIUM_SAND_NUT: i32 = 2879;
    pub const MEDIUM_TAMED_ROCKS: i32 = 2881;
    pub const MEDIUM_THICKNO: i32 = 2883;
    pub const MEDIUM_HICK_JET: i32 = 2885;
    pub const MEDIUM_UESNKRL_NRIEDDO: i32 = 2887;
    pub const MEDIUM_LAME_T: i32 = 2889;
    pub const MEDIUM_CUTE_HI: i32 = 2891;

    pub const HARD_BAKER_CLIMB: i32 = 2722;
    pub const HARD_BLUE_GRIM_GUIDED: i32 = 2724;
    pub const HARD_BY_LOOK: i32 = 2726;
    pub const HARD_C_ON_GAME_HOC: i32 = 2728;
    pub const HARD_COPPER_ORE_CRYPTS: i32 = 2730;
    pub const HARD_DARN_DRAKE: i32 = 2732;
    pub const HARD_DEKAGRAM: i32 = 2734;
    pub const HARD_DO_SAY_MORE: i32 = 2736;
    pub const HARD_DR_WARDEN_FUNK: i32 = 2738;
    pub const HARD_DRAGONS_LAMENT: i32 = 2740;
    pub const HARD_MOTHERBOARD: i32 = 2742;
    pub const HARD_MY_MANGLE_LAL: i32 = 2744;
    pub const HARD_O_BIRDZ_A_ZANY_EN_PC: i32 = 2746;
    pub const HARD_QUIT_HORRIBLE_TYRANT: i32 = 2748;
    pub const HARD_RAT_MAT_WITHIN: i32 = 2750;
    pub const HARD_SLIDE_WOMAN: i32 = 2752;
    pub const HARD_VEIL_VEDA: i32 = 2754;
    pub const HARD_WOO_AN_EGG_KIWI: i32 = 2756;

    pub const ELITE_AT_HERG: i32 = 12073;
    pub const ELITE_CAREER_IN_MOON: i32 = 12075;
    pub const ELITE_COOL_NERD: i32 = 12077;
    pub const ELITE_DR_HITMAN: i32 = 12079;
    pub const ELITE_LADDER_MEMO_GUV: i32 = 12081;
    pub const ELITE_MACHETE_CLAM: i32 = 12083;
    pub const ELITE_NO_OWNER: i32 = 12085;
    pub const ELITE_OUR_OWN_NEEDS: i32 = 12087;
    pub const ELITE_SNAKES_SO_I_SAIL: i32 = 12089;
    pub const ELITE_UNLEASH_NIGHT_MIST: i32 = 12091;
    pub const ELITE_MAJORS_LAVA_BADS_AIR: i32 = 12093;
    pub const ELITE_CIRR_JAD: i32 = 12095;
}

/// Scenery object ids.
pub mod object {
    /// Awowogei's throne on Ape Atoll.
    pub const APE_ATOLL_THRONE: i32 = 4788;
}

/// Varbit ids read by state-dependent attributes.
pub mod varbit {
    /// 0 while Nieve runs the Gnome Stronghold slayer cave, nonzero once
    /// Steve has taken over.
    pub const GNOME_SLAYER_MASTER: i32 = 5027;

    /// Dragon Slayer II progress counter; Jardric moves camp partway in.
    pub const DRAGON_SLAYER_II_PROGRESS: i32 = 6104;

    /// 1 while Jarvis' gravestone stands in the Lumbridge graveyard.
    pub const JARVIS_GRAVESTONE: i32 = 5892;
}
