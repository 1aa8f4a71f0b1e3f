//! Character templates — candidate catalogs and per-template generation.
//!
//! Each template is a sequence of exact-budget picks over its candidate
//! pools (advantages, disadvantages, skill packages), accumulated into one
//! trait list. Earlier picks are passed back in as the committed selection,
//! so duplicate names and prerequisite checks span the whole build.
//!
//! The wizard's spell pick is prerequisite-gated: the caller supplies a
//! compiled [`PrereqTable`] (loaded from the spell prerequisite document)
//! and leftover points are spent raising chosen spells up the point-tier
//! ladder.

use rand::Rng;

use crate::advancement::improve_traits;
use crate::catalog::{
    group, levels, self_control_levels, self_control_levels2, single, CandidatePool,
};
use crate::prereq::PrereqTable;
use crate::select::{pick_exact_gated, PickPolicy, SelectError};
use crate::trait_list::{contains_name, Category, Trait};

use Category::{Advantage, Attribute, Disadvantage, Power, SecondaryTrait, Skill, Spell};

/// A generatable character template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Barbarian,
    Cleric,
    Wizard,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Barbarian, Template::Cleric, Template::Wizard];

    pub fn name(&self) -> &'static str {
        match self {
            Template::Barbarian => "barbarian",
            Template::Cleric => "cleric",
            Template::Wizard => "wizard",
        }
    }

    /// Case-insensitive lookup by template name.
    pub fn from_name(name: &str) -> Option<Template> {
        Template::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

/// Generate a full random build for one template.
pub fn generate(
    template: Template,
    prereqs: &PrereqTable,
    policy: &PickPolicy,
    rng: &mut impl Rng,
) -> Result<Vec<Trait>, SelectError> {
    match template {
        Template::Barbarian => barbarian(prereqs, policy, rng),
        Template::Cleric => cleric(prereqs, policy, rng),
        Template::Wizard => wizard(prereqs, policy, rng),
    }
}

/// One single-spell group per name, all at 1 point.
fn spell_pool(names: &[&str]) -> CandidatePool {
    names.iter().map(|n| single(n, 1, Spell)).collect()
}

/// Run one exact-budget pick and fold the result into the build.
fn pick_into(
    traits: &mut Vec<Trait>,
    pool: &CandidatePool,
    target: i32,
    prereqs: &PrereqTable,
    policy: &PickPolicy,
    rng: &mut impl Rng,
) -> Result<(), SelectError> {
    let picked = pick_exact_gated(pool, target, prereqs, traits, policy, rng)?;
    traits.extend(picked);
    Ok(())
}

// ── Barbarian ──────────────────────────────────────────────────────────

fn barbarian(
    prereqs: &PrereqTable,
    policy: &PickPolicy,
    rng: &mut impl Rng,
) -> Result<Vec<Trait>, SelectError> {
    let mut traits = Vec::new();

    let ads: CandidatePool = vec![
        levels("ST +{}", 9, 3, Attribute),
        levels("HT +{}", 10, 3, Attribute),
        levels("Per +{}", 5, 6, SecondaryTrait),
        single("Absolute Direction", 5, Advantage),
        levels("Acute Hearing {}", 2, 5, Advantage),
        levels("Acute Taste and Smell {}", 2, 5, Advantage),
        levels("Acute Touch {}", 2, 5, Advantage),
        levels("Acute Vision {}", 2, 5, Advantage),
        single("Alcohol Tolerance", 1, Advantage),
        single("Animal Empathy", 5, Advantage),
        levels("Animal Friend {}", 5, 4, Advantage),
        single("Combat Reflexes", 15, Advantage),
        group(&[("Fit", 5), ("Very Fit", 15)], Advantage),
        levels("Hard to Kill {}", 2, 5, Advantage),
        levels("Hard to Subdue {}", 2, 5, Advantage),
        levels("Lifting ST +{}", 3, 3, Advantage),
        group(&[("Luck", 15), ("Extraordinary Luck", 30)], Advantage),
        levels("Magic Resistance {}", 2, 5, Advantage),
        levels("Signature Gear {}", 1, 10, Advantage),
        group(&[("Striking ST 1", 5), ("Striking ST 2", 9)], Advantage),
        levels("Temperature Tolerance {}", 1, 2, Advantage),
        single("Weapon Bond", 1, Advantage),
    ];
    pick_into(&mut traits, &ads, 30, prereqs, policy, rng)?;

    let disads1: CandidatePool = vec![
        single("Easy to Read", -10, Disadvantage),
        self_control_levels("Gullibility", -10, Disadvantage),
        single("Language: Spoken (Native) / Written (None)", -3, Disadvantage),
        levels("Low TL {}", -5, 2, Disadvantage),
        single("Odious Personal Habit (Unrefined manners)", -5, Disadvantage),
        self_control_levels("Phobia (Machinery)", -5, Disadvantage),
        single("Wealth (Struggling)", -10, Disadvantage),
    ];
    pick_into(&mut traits, &disads1, -10, prereqs, policy, rng)?;

    let mut disads2: CandidatePool = vec![
        group(
            &[("Appearance: Unattractive", -4), ("Appearance: Ugly", -8)],
            Disadvantage,
        ),
        self_control_levels("Bad Temper", -10, Disadvantage),
        self_control_levels("Berserk", -10, Disadvantage),
        self_control_levels("Bloodlust", -10, Disadvantage),
        self_control_levels2(
            "Compulsive Carousing",
            -5,
            "Phobia (Crowds)",
            -15,
            Disadvantage,
        ),
        self_control_levels("Gluttony", -5, Disadvantage),
        levels("Ham-Fisted {}", -5, 2, Disadvantage),
        single("Horrible Hangovers", -1, Disadvantage),
        self_control_levels("Impulsiveness", -10, Disadvantage),
        self_control_levels("Overconfidence", -10, Disadvantage),
        single("Sense of Duty (Adventuring companions)", -5, Disadvantage),
    ];
    disads2.extend(disads1);
    pick_into(&mut traits, &disads2, -20, prereqs, policy, rng)?;

    let survival: CandidatePool = vec![
        single("Survival (Arctic)", 1, Skill),
        single("Survival (Desert)", 1, Skill),
        single("Survival (Island/Beach)", 1, Skill),
        single("Survival (Jungle)", 1, Skill),
        single("Survival (Mountain)", 1, Skill),
        single("Survival (Plains)", 1, Skill),
        single("Survival (Swampland)", 1, Skill),
        single("Survival (Woodlands)", 1, Skill),
    ];
    pick_into(&mut traits, &survival, 1, prereqs, policy, rng)?;

    let ranged: CandidatePool = vec![
        single("Thrown Weapon (Axe/Mace)", 4, Skill),
        single("Thrown Weapon (Harpoon)", 4, Skill),
        single("Thrown Weapon (Spear)", 4, Skill),
        single("Thrown Weapon (Stick)", 4, Skill),
        single("Bolas", 4, Skill),
        single("Bow", 4, Skill),
        single("Spear Thrower", 4, Skill),
        single("Throwing", 4, Skill),
    ];
    pick_into(&mut traits, &ranged, 4, prereqs, policy, rng)?;

    let melee: CandidatePool = vec![
        group(
            &[
                ("Axe/Mace", 8),
                ("Broadsword", 8),
                ("Spear", 8),
                ("Flail", 8),
            ],
            Skill,
        ),
        single("Shield", 8, Skill),
        single("Polearm", 16, Skill),
        single("Spear", 16, Skill),
        single("Two-Handed Axe/Mace", 16, Skill),
        single("Two-Handed Sword", 16, Skill),
        single("Two-Handed Flail", 16, Skill),
    ];
    pick_into(&mut traits, &melee, 16, prereqs, policy, rng)?;

    let mimicry: CandidatePool = vec![
        single("Mimicry (Animal Sounds)", 1, Skill),
        single("Mimicry (Bird Calls)", 1, Skill),
    ];
    pick_into(&mut traits, &mimicry, 1, prereqs, policy, rng)?;

    let background: CandidatePool = vec![
        single("Forced Entry", 1, Skill),
        single("Climbing", 1, Skill),
        single("First Aid", 1, Skill),
        single("Gesture", 1, Skill),
        single("Seamanship", 1, Skill),
        single("Carousing", 1, Skill),
        single("Lifting", 1, Skill),
        single("Skiing", 1, Skill),
        single("Observation", 1, Skill),
    ];
    pick_into(&mut traits, &background, 4, prereqs, policy, rng)?;

    Ok(traits)
}

// ── Cleric ─────────────────────────────────────────────────────────────

const CLERIC_SPELLS_PI1: [&str; 29] = [
    "Armor",
    "Aura",
    "Body-Reading",
    "Bravery",
    "Cleansing",
    "Coolness",
    "Detect Magic",
    "Detect Poison",
    "Final Rest",
    "Lend Energy",
    "Lend Vitality",
    "Light",
    "Might",
    "Minor Healing",
    "Purify Air",
    "Purify Water",
    "Recover Energy",
    "Sense Life",
    "Sense Spirit",
    "Share Vitality",
    "Shield",
    "Silence",
    "Stop Bleeding",
    "Test Food",
    "Thunderclap",
    "Umbrella",
    "Vigor",
    "Warmth",
    "Watchdog",
];

const CLERIC_SPELLS_PI2: [&str; 35] = [
    "Awaken",
    "Clean",
    "Command",
    "Compel Truth",
    "Continual Light",
    "Create Water",
    "Glow",
    "Great Voice",
    "Healing Slumber",
    "Major Healing",
    "Peaceful Sleep",
    "Persuasion",
    "Purify Food",
    "Relieve Sickness",
    "Remove Contagion",
    "Resist Acid",
    "Resist Cold",
    "Resist Disease",
    "Resist Fire",
    "Resist Lightning",
    "Resist Pain",
    "Resist Poison",
    "Resist Pressure",
    "Restore Hearing",
    "Restore Memory",
    "Restore Sight",
    "Restore Speech",
    "Seeker",
    "Soilproof",
    "Stop Spasm",
    "Summon Spirit",
    "Truthsayer",
    "Turn Spirit",
    "Turn Zombie",
    "Wall of Light",
];

const CLERIC_SPELLS_PI3: [&str; 26] = [
    "Affect Spirits",
    "Astral Vision",
    "Breathe Water",
    "Command Spirit",
    "Create Food",
    "Cure Disease",
    "Dispel Possession",
    "Flaming Weapon",
    "Great Healing",
    "Magic Resistance",
    "Neutralize Poison",
    "Oath",
    "Relieve Madness",
    "Relieve Paralysis",
    "Repel Spirits",
    "Restoration",
    "See Secrets",
    "Silver Tongue",
    "Stone to Flesh",
    "Stop Paralysis",
    "Strengthen Will",
    "Sunbolt",
    "Sunlight",
    "Suspended Animation",
    "Water to Wine",
    "Wisdom",
];

const CLERIC_SPELLS_PI4: [&str; 14] = [
    "Astral Block",
    "Banish",
    "Continual Sunlight",
    "Dispel Magic",
    "Divination",
    "Essential Food",
    "Gift of Letters",
    "Gift of Tongues",
    "Instant Neutralize Poison",
    "Instant Restoration",
    "Monk's Banquet",
    "Regeneration",
    "Suspend Curse",
    "Vigil",
];

const CLERIC_SPELLS_PI5: [&str; 9] = [
    "Bless",
    "Curse",
    "Earthquake",
    "Entrap Spirit",
    "Instant Regeneration",
    "Pentagram",
    "Remove Curse",
    "Storm",
    "Suspend Mana",
];

fn cleric(
    prereqs: &PrereqTable,
    policy: &PickPolicy,
    rng: &mut impl Rng,
) -> Result<Vec<Trait>, SelectError> {
    let mut traits = Vec::new();

    let mut spells = spell_pool(&CLERIC_SPELLS_PI1);
    spells.extend(spell_pool(&CLERIC_SPELLS_PI2));
    spells.extend(spell_pool(&CLERIC_SPELLS_PI3));

    let powers: CandidatePool = vec![
        group(
            &[
                ("Ally (Divine servent, PM, Summonable, 12-)", 19),
                ("Ally (Divine servent, PM, Summonable, 15-)", 29),
            ],
            Power,
        ),
        group(
            &[
                ("Detect evil (PM)", 18),
                ("Detect good (PM)", 18),
                ("Detect supernatural beings (PM)", 18),
                ("Ally (Divine servent, PM, Summonable, 15-)", 29),
            ],
            Power,
        ),
        single("Healing (Faith Healing, PM)", 33, Power),
        single("Intuition (PM)", 14, Power),
        single("Oracle (PM)", 14, Power),
        group(
            &[
                (
                    "Patron (Deity, PM, Special Abilities, Highly Accessible, 6-)",
                    36,
                ),
                (
                    "Patron (Deity, PM, Special Abilities, Highly Accessible, 9-)",
                    72,
                ),
            ],
            Power,
        ),
        group(
            &[
                ("Resistant to Evil Supernatural Powers (PM) +3", 5),
                ("Resistant to Evil Supernatural Powers (PM) +8", 7),
            ],
            Power,
        ),
        single("Spirit Empathy (PM)", 9, Power),
        single("True Faith (PM, Turning)", 24, Power),
    ];
    let mut ads1 = powers;
    ads1.extend(spells.clone());
    pick_into(&mut traits, &ads1, 25, prereqs, policy, rng)?;

    let mut ads2: CandidatePool = vec![
        levels("ST +{}", 10, 2, Attribute),
        single("DX +1", 20, Attribute),
        single("IQ +1", 20, Attribute),
        levels("HT +{}", 10, 2, Attribute),
        levels("Will +{}", 5, 4, SecondaryTrait),
        levels("FP +{}", 3, 6, SecondaryTrait),
        levels("Fearlessness +{}", 2, 5, Advantage),
        single("Unfazeable", 15, Advantage),
        levels("Healer {}", 10, 2, Advantage),
        single("Language (Spoken: Accented / Written: None)", 2, Advantage),
        single("Language (Spoken: Broken / Written: Broken)", 2, Advantage),
        single("Language (Spoken: None / Written: Accented)", 2, Advantage),
        single("Language: Spoken (Native) / Written (None)", 3, Advantage),
        single("Language: Spoken (Accented) / Written (Broken)", 3, Advantage),
        single("Language: Spoken (Broken) / Written (Accented)", 3, Advantage),
        single("Language: Spoken (None) / Written (Native)", 3, Advantage),
        single("Language (Spoken: Native / Written: Broken)", 4, Advantage),
        single("Language (Spoken: Accented / Written: Accented)", 4, Advantage),
        single("Language (Spoken: Broken / Written: Native)", 4, Advantage),
        single("Language (Spoken: Native / Written: Accented)", 5, Advantage),
        single("Language (Spoken: Accented / Written: Native)", 5, Advantage),
        single("Language (Spoken: Native / Written: Native)", 6, Advantage),
        single("Luck", 15, Advantage),
        levels("Mind Shield {}", 4, 5, Advantage),
        group(
            &[("Power Investiture 4", 10), ("Power Investiture 5", 20)],
            Power,
        ),
        group(
            &[
                ("Resistant to Disease (PM) +3", 3),
                ("Resistant to Disease (PM) +8", 5),
            ],
            Power,
        ),
        levels("Signature Gear {}", 1, 10, Advantage),
    ];
    ads2.extend(ads1.clone());
    pick_into(&mut traits, &ads2, 20, prereqs, policy, rng)?;

    let disads1: CandidatePool = vec![
        single("Honesty", -10, Disadvantage),
        single("Sense of Duty (Coreligionists)", -10, Disadvantage),
        single("Vow (No edged weapons)", -10, Disadvantage),
    ];
    pick_into(&mut traits, &disads1, -10, prereqs, policy, rng)?;

    let mut disads2: CandidatePool = vec![
        group(
            &[
                ("Disciplines of Faith (Ritualism)", -5),
                ("Disciplines of Faith (Ritualism)", -10),
                ("Disciplines of Faith (Mysticism)", -5),
                ("Disciplines of Faith (Mysticism)", -10),
            ],
            Disadvantage,
        ),
        single("Fanaticism", -15, Disadvantage),
        group(
            &[
                ("Intolerance (Evil religions)", -5),
                ("Intolerance (All other religions)", -10),
            ],
            Disadvantage,
        ),
        group(
            &[("Vow (Chastity)", -5), ("Vow (Vegetarianism)", -5)],
            Disadvantage,
        ),
        group(
            &[("Wealth (Struggling)", -10), ("Wealth (Poor)", -15)],
            Disadvantage,
        ),
    ];
    disads2.extend(disads1);
    pick_into(&mut traits, &disads2, -15, prereqs, policy, rng)?;

    let mut disads3: CandidatePool = vec![
        self_control_levels("Charitable", -15, Disadvantage),
        self_control_levels2(
            "Compulsive Generosity",
            -5,
            "Miserliness",
            -10,
            Disadvantage,
        ),
        self_control_levels("Gluttony", -5, Disadvantage),
        self_control_levels("Overconfidence", -5, Disadvantage),
        group(&[("Overweight", -1), ("Fat", -3)], Disadvantage),
        self_control_levels("Selfless", -5, Disadvantage),
        single("Sense of Duty (Adventuring companions)", -5, Disadvantage),
        single("Stubbornness", -5, Disadvantage),
        self_control_levels("Truthfulness", -5, Disadvantage),
        single("Weirdness Magnet", -15, Disadvantage),
    ];
    disads3.extend(disads2.clone());
    pick_into(&mut traits, &disads3, -25, prereqs, policy, rng)?;

    let ranged: CandidatePool = vec![
        single("Innate Attack", 4, Skill),
        single("Throwing", 4, Skill),
        single("Sling", 4, Skill),
    ];
    pick_into(&mut traits, &ranged, 4, prereqs, policy, rng)?;

    let melee: CandidatePool = vec![
        group(&[("Axe/Mace", 8), ("Broadsword", 8), ("Flail", 8)], Skill),
        single("Shield", 4, Skill),
        single("Staff", 12, Skill),
    ];
    pick_into(&mut traits, &melee, 12, prereqs, policy, rng)?;

    let lore: CandidatePool = vec![
        single("Hidden Lore (Demons)", 1, Skill),
        single("Hidden Lore (Spirits)", 1, Skill),
        single("Hidden Lore (Undead)", 1, Skill),
    ];
    pick_into(&mut traits, &lore, 1, prereqs, policy, rng)?;

    let background: CandidatePool = vec![
        single("Climbing", 1, Skill),
        single("Stealth", 1, Skill),
        single("Gesture", 1, Skill),
        single("Panhandling", 1, Skill),
        single("Savoir-Faire (High Society)", 1, Skill),
        single("Research", 1, Skill),
        single("Writing", 1, Skill),
        single("Hiking", 1, Skill),
        single("Scrounging", 1, Skill),
        single("Observation", 1, Skill),
        single("Search", 1, Skill),
    ];
    pick_into(&mut traits, &background, 5, prereqs, policy, rng)?;

    // Higher investiture unlocks the deeper spell lists for the final pick.
    if contains_name(&traits, "Power Investiture 4")
        || contains_name(&traits, "Power Investiture 5")
    {
        spells.extend(spell_pool(&CLERIC_SPELLS_PI4));
        if contains_name(&traits, "Power Investiture 5") {
            spells.extend(spell_pool(&CLERIC_SPELLS_PI5));
        }
    }
    pick_into(&mut traits, &spells, 20, prereqs, policy, rng)?;

    Ok(traits)
}

// ── Wizard ─────────────────────────────────────────────────────────────

/// Spells every wizard can learn outright (with the template's Magery).
const WIZARD_SPELLS_BASIC: [&str; 24] = [
    "Apportation",
    "Blur",
    "Climbing",
    "Daze",
    "Detect Magic",
    "Foolishness",
    "Haste",
    "Ignite Fire",
    "Itch",
    "Lend Energy",
    "Lend Vitality",
    "Light",
    "Purify Air",
    "Seek Earth",
    "Seek Fire",
    "Seek Water",
    "Sense Foes",
    "Sense Life",
    "Simple Illusion",
    "Sound",
    "Spasm",
    "Test Load",
    "Touch",
    "Counterspell",
];

/// Spells gated by the prerequisite document (`data/spell_prereqs.json`).
const WIZARD_SPELLS_CHAINED: [&str; 14] = [
    "Blink",
    "Complex Illusion",
    "Continual Light",
    "Create Fire",
    "Dispel Magic",
    "Explosive Fireball",
    "Fireball",
    "Great Haste",
    "Invisibility",
    "Mass Daze",
    "Perfect Illusion",
    "Recover Energy",
    "Shape Earth",
    "Shape Fire",
];

fn wizard(
    prereqs: &PrereqTable,
    policy: &PickPolicy,
    rng: &mut impl Rng,
) -> Result<Vec<Trait>, SelectError> {
    // Magery 3 is part of the template base, not a pick; the spell
    // prerequisites lean on it.
    let mut traits = vec![Trait::new("Magery 3", 35, Power)];

    let ads: CandidatePool = vec![
        single("DX +1", 20, Attribute),
        single("IQ +1", 20, Attribute),
        levels("FP +{}", 3, 6, SecondaryTrait),
        levels("Will +{}", 5, 4, SecondaryTrait),
        group(&[("Magery 4", 10), ("Magery 5", 20)], Power),
        group(&[("Eidetic Memory", 5), ("Photographic Memory", 10)], Advantage),
        levels("Acute Vision {}", 2, 5, Advantage),
        group(&[("Luck", 15), ("Extraordinary Luck", 30)], Advantage),
        single("Language Talent", 10, Advantage),
        levels("Signature Gear {}", 1, 10, Advantage),
        single("Wild Talent 1", 20, Advantage),
    ];
    pick_into(&mut traits, &ads, 30, prereqs, policy, rng)?;

    let disads1: CandidatePool = vec![
        self_control_levels("Curious", -5, Disadvantage),
        self_control_levels(
            "Obsession (Become the world's most powerful wizard)",
            -10,
            Disadvantage,
        ),
        single("Skinny", -5, Disadvantage),
        single("Social Stigma (Excommunicated)", -10, Disadvantage),
        single("Unfit", -5, Disadvantage),
        single("Weirdness Magnet", -15, Disadvantage),
    ];
    pick_into(&mut traits, &disads1, -15, prereqs, policy, rng)?;

    let mut disads2: CandidatePool = vec![
        single("Absent-Mindedness", -15, Disadvantage),
        single("Bad Sight (Mitigable)", -10, Disadvantage),
        single("Combat Paralysis", -15, Disadvantage),
        self_control_levels("Cowardice", -10, Disadvantage),
        single("Klutz", -5, Disadvantage),
        self_control_levels("Loner", -5, Disadvantage),
        single("Low Pain Threshold", -10, Disadvantage),
        single("Nervous Stomach", -1, Disadvantage),
        single("Oblivious", -5, Disadvantage),
        self_control_levels("Post-Combat Shakes", -5, Disadvantage),
        single("Sense of Duty (Adventuring companions)", -5, Disadvantage),
        single("Stuttering", -10, Disadvantage),
    ];
    disads2.extend(disads1);
    pick_into(&mut traits, &disads2, -20, prereqs, policy, rng)?;

    let weapons: CandidatePool = vec![
        single("Staff", 8, Skill),
        single("Smallsword", 8, Skill),
        single("Knife", 4, Skill),
        single("Cloak", 4, Skill),
        single("Shield (Buckler)", 4, Skill),
    ];
    pick_into(&mut traits, &weapons, 8, prereqs, policy, rng)?;

    let background: CandidatePool = vec![
        single("Fast-Draw (Potion)", 1, Skill),
        single("First Aid", 1, Skill),
        single("Gesture", 1, Skill),
        single("Hidden Lore (Demons)", 1, Skill),
        single("Hidden Lore (Magic Items)", 1, Skill),
        single("Hidden Lore (Magical Writings)", 1, Skill),
        single("Hidden Lore (Spirits)", 1, Skill),
        single("Meditation", 1, Skill),
        single("Research", 1, Skill),
        single("Scrounging", 1, Skill),
        single("Writing", 1, Skill),
    ];
    pick_into(&mut traits, &background, 5, prereqs, policy, rng)?;

    // Spell pick is prerequisite-gated: chained spells only open up once
    // their foundations are in the selection.
    let mut spells = spell_pool(&WIZARD_SPELLS_BASIC);
    spells.extend(spell_pool(&WIZARD_SPELLS_CHAINED));
    pick_into(&mut traits, &spells, 20, prereqs, policy, rng)?;

    // Leftover template points go into raising chosen spells.
    let chosen: Vec<String> = traits
        .iter()
        .filter(|t| t.category == Spell)
        .map(|t| t.name.clone())
        .collect();
    let roster: Vec<&str> = chosen.iter().map(String::as_str).collect();
    improve_traits(&roster, 4, &mut traits, 1, Spell, rng);

    Ok(traits)
}
