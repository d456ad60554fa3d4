// ============================================================================
// Static content blocks for generated concepts
// ============================================================================
//
// Every section of a generated concept is one of these pre-authored blocks.
// World map and art style have per-theme variants (see `selector`); the
// other sections are fixed.

pub const PLOTLINE: &str = r#"**The Dreamer's Paradox**

You play as Luna, a lucid dreamer trapped in recursive nightmares. Each dream layer contains temporal puzzles that must be solved by manipulating time - rewinding conversations, fast-forwarding through events, or pausing reality to examine clues.

**Act 1: The Shallow Sleep**
Luna discovers her ability to control time in dreams when a recurring nightmare of her childhood home begins changing. She must learn to rewind conversations with shadow figures to uncover repressed memories.

**Act 2: The Deep Dive**
As Luna descends deeper into her subconscious, the time manipulation becomes more complex. She can now split timelines, creating parallel dream sequences to solve multi-layered puzzles involving her past trauma.

**Act 3: The Nightmare's Core**
In the deepest layer, Luna faces her greatest fear - losing her grip on reality. Time becomes unstable, and she must use all her temporal abilities to escape before the nightmare consumes her waking mind.

The story explores themes of memory, trauma healing, and the power of facing one's fears."#;

pub const GAME_LOOP: &str = r#"**Core Game Loop:**

1. **Exploration Phase** (30-60 seconds)
   - Player navigates dream environment
   - Discovers temporal anomalies and NPCs
   - Identifies puzzle elements

2. **Puzzle Discovery** (15-30 seconds)
   - Temporal puzzle is revealed
   - Player analyzes the time-based challenge
   - Multiple solution approaches become apparent

3. **Time Manipulation** (60-120 seconds)
   - Player experiments with time powers
   - Rewind, pause, or fast-forward elements
   - Observe consequences of temporal changes

4. **Solution Implementation** (30-45 seconds)
   - Execute the discovered solution
   - Watch environmental changes unfold
   - Progress story through resolved timeline

5. **Narrative Progression** (15-30 seconds)
   - Story beats advance
   - New memories/trauma elements revealed
   - Transition to next dream layer or area

**Meta Loop:** Complete 3-5 puzzle sequences -> Boss encounter with major temporal challenge -> Story revelation -> Descend to deeper dream layer"#;

/// Screens sketched in the UI section, in display order
pub const UI_SCREENS: [&str; 6] = [
    "Main Menu",
    "Gameplay HUD",
    "Inventory System",
    "Settings Panel",
    "Dialogue Interface",
    "Time Control UI",
];

pub const UI_SKETCHES: &str = r#"**Interface Sketches**

**Main Menu**
- Title rendered over a slowly drifting dreamscape
- Continue, New Dream, Settings, Quit stacked on the left edge

**Gameplay HUD**
- Minimal by default: objective hint top-left, time charge meter bottom-center
- Interactive objects pulse softly when the player looks at them

**Inventory System**
- Radial wheel of collected memory fragments
- Hover a fragment to replay its short memory clip

**Settings Panel**
- Tabs for Audio, Video, Controls, Accessibility
- Colorblind-safe palette toggle and motion-reduction slider

**Dialogue Interface**
- Portrait with name plate, text box anchored low
- Rewindable lines marked with a small clock glyph

**Time Control UI**
- Circular dial: rewind, pause, fast-forward segments
- Timeline scrubber appears while a rewind is held"#;

// ----------------------------------------------------------------------------
// World map variants
// ----------------------------------------------------------------------------

pub const WORLD_MAP_HORROR: &str = r#"**The Hollow Asylum Grounds**

**Central Hub: Ward Zero**
A decaying asylum rotunda where every corridor loops back on itself. The lights fail in sequence, and the player's only safe zones are the flickering nurse stations.

**Region 1: The Flooded Cellars**
Knee-deep black water hides drains that pull the player into earlier versions of the same room. Sound carries strangely here - footsteps arrive before the things that make them.

**Region 2: The Chapel of Whispers**
Pews rearranged into a maze. Confession booths act as one-way doors between floors of the nightmare.

**Region 3: The Attic Archive**
Patient files scattered across rafters. Each recovered file unlocks a fragment of the map and a new route back to Ward Zero.

**Navigation:** Map pages are torn and must be pieced together; unexplored areas stay smeared in ink until visited."#;

pub const WORLD_MAP_FANTASY: &str = r#"**The Shattered Kingdom of Eldmoor**

**Central Hub: Lanternfall Keep**
A hilltop castle whose great lantern keeps the surrounding wilds at bay. Merchants, trainers, and the royal archive gather in its courtyard.

**Region 1: The Whispering Woods**
Ancient trees that rearrange their paths at night. Druid circles grant safe passage to those who solve their rune riddles.

**Region 2: The Sunken Citadel**
A drowned fortress half-reclaimed by the lake. Its flooded halls rise and fall with the phases of the moon.

**Region 3: The Ember Peaks**
Volcanic mountains ruled by a slumbering dragon. Forges at the summit temper legendary gear.

**Navigation:** Waystones link discovered regions; the kingdom map fills in as the lantern's light reaches further."#;

pub const WORLD_MAP_DEFAULT: &str = r#"**The Layered Dreamscape**

**Central Hub: The Bedroom Between**
Luna's childhood bedroom, suspended in a starless void. Doors in the walls lead to each dream layer and rearrange after every major revelation.

**Layer 1: The Shallow Sleep**
Familiar streets from Luna's hometown, slightly wrong. Clocks run at different speeds on each block.

**Layer 2: The Deep Dive**
Fragmented memories float as islands connected by bridges of light that only exist while time is paused.

**Layer 3: The Nightmare's Core**
A collapsing cathedral of mirrors where past and present versions of each room overlap.

**Navigation:** The map is drawn as concentric rings; each solved puzzle sharpens the ring it belongs to."#;

// ----------------------------------------------------------------------------
// Art style variants
// ----------------------------------------------------------------------------

pub const ART_STYLE_HORROR: &str = r#"**Decayed Gothic Horror**

**Visual Style:** Grainy, desaturated realism with oppressive darkness
- **Color Palette:** Bruised greens, rust browns, bone white; a single sickly red reserved for danger
- **Lighting:** Single-source lighting from flashlights and failing bulbs; deep, crushing shadows
- **Textures:** Peeling wallpaper, wet concrete, mold blooms that spread over time

**Character Design:**
- Protagonist: Ordinary clothing that grows torn and stained as the night goes on
- Entities: Elongated silhouettes that are never fully lit; faces hidden or wrong

**Visual Effects:**
- Film grain and chromatic aberration intensify with fear
- Vignette tightens when an entity is near
- Brief frame skips during scripted scares"#;

pub const ART_STYLE_SCI_FI: &str = r#"**Neon Orbital Futurism**

**Visual Style:** Clean hard-surface sci-fi with luminous accents
- **Color Palette:** Deep space navy, cyan holograms, magenta warning lights
- **Lighting:** Emissive panels and volumetric beams cutting through station haze
- **Textures:** Brushed alloys, frosted glass, scrolling data overlays

**Character Design:**
- Crew: Modular suits with readable silhouettes and color-coded roles
- Machines: Visible cores and articulated limbs that telegraph their state

**Visual Effects:**
- Holographic UI projected into the world
- Zero-gravity particle drift in depressurized areas
- Warp transitions with stretched starlight"#;

pub const ART_STYLE_DEFAULT: &str = r#"**Ethereal Nightmare Aesthetic**

**Visual Style:** Surreal photorealism with dreamy distortions
- **Color Palette:** Deep purples, midnight blues, silver highlights with occasional warm amber for "safe" dream spaces
- **Lighting:** Dramatic chiaroscuro with supernatural glows emanating from time-distorted objects
- **Textures:** Soft, flowing fabrics that defy gravity; crystalline time fragments; misty ethereal effects

**Character Design:**
- Luna: Flowing hair that moves like liquid, eyes that reflect different time periods
- Shadow Figures: Partially transparent with clock-like internal mechanisms visible
- Environment: Architecture that bends and morphs, with floating temporal artifacts

**Visual Effects:**
- Time rewind: Objects trail with ghostly afterimages
- Time pause: Everything except interactive elements turns monochrome
- Time acceleration: Motion blur with streaking light effects"#;
