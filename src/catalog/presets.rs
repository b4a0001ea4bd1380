use std::path::Path;

use crate::player::Track;

/// Whether a preset belongs to the core set or the signature set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    Core,
    Signature,
}

/// One entry of the style catalog.
#[derive(Debug, Clone)]
pub struct StylePreset {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub mood: &'static str,
    pub tags: &'static [&'static str],
    pub image_url: &'static str,
    pub audio_url: &'static str,
    pub category: Category,
    /// Accent color used by the browser cards.
    pub accent: &'static str,
}

/// Artist credited on every audition track.
const CATALOG_ARTIST: &str = "Studio Sessions";

/// Most presets audition with the same demo clip.
const SHARED_AUDIO: &str = "audio/dubstep.mp3";

pub const STYLE_PRESETS: &[StylePreset] = &[
    StylePreset {
        id: "dubstep",
        title: "Dubstep",
        description: "Wobbly, Punchy, Dark, Heavy, Aggressive",
        mood: "Heaving low-end with razor-sharp drops.",
        tags: &["Bass", "Syncopated", "Night"],
        image_url: "music/dubstep.png",
        audio_url: SHARED_AUDIO,
        category: Category::Core,
        accent: "#6949FF",
    },
    StylePreset {
        id: "bigroom",
        title: "Big Room",
        description: "Anthemic, Energetic",
        mood: "Festival-ready supersaws and open-air leads.",
        tags: &["Festival", "4x4", "Anthem"],
        image_url: "music/bigroom.png",
        audio_url: SHARED_AUDIO,
        category: Category::Core,
        accent: "#F25F5C",
    },
    StylePreset {
        id: "piano-house",
        title: "Piano House",
        description: "Warm, Melodic",
        mood: "Sun-drenched chords with soulful toplines.",
        tags: &["Keys", "Feel-good", "Groove"],
        image_url: "music/piano.png",
        audio_url: "audio/piano.mp3",
        category: Category::Core,
        accent: "#F2B705",
    },
    StylePreset {
        id: "progressive",
        title: "Progressive House",
        description: "Euphoric, Atmospheric",
        mood: "Slow-building crescendos and lush pads.",
        tags: &["Journey", "Pad-heavy", "Euphoric"],
        image_url: "music/progressive.png",
        audio_url: SHARED_AUDIO,
        category: Category::Core,
        accent: "#3DD6D0",
    },
    StylePreset {
        id: "folktronica",
        title: "Folktronica",
        description: "Organic, Acoustic",
        mood: "Finger-picked warmth meets glitch microbeats.",
        tags: &["Organic", "Hybrid", "Warm"],
        image_url: "music/folk.png",
        audio_url: SHARED_AUDIO,
        category: Category::Core,
        accent: "#9EE493",
    },
    StylePreset {
        id: "edm",
        title: "EDM",
        description: "Energetic, Upbeat",
        mood: "Wide stereo leads and hands-up moments.",
        tags: &["Mainstage", "Bright", "Uplift"],
        image_url: "music/edm.png",
        audio_url: SHARED_AUDIO,
        category: Category::Core,
        accent: "#F7A1C4",
    },
    StylePreset {
        id: "ambient-chop",
        title: "Ambient Chop",
        description: "Airy, Cinematic",
        mood: "Granular textures with orchestral bloom.",
        tags: &["Cinematic", "Slow", "Texture"],
        image_url: "music/progressive.png",
        audio_url: SHARED_AUDIO,
        category: Category::Signature,
        accent: "#B48BFF",
    },
    StylePreset {
        id: "hyperpop",
        title: "Hyperpop",
        description: "Glossy, Sharp",
        mood: "Detuned glitz with elastic drums.",
        tags: &["Glitch", "Vox chop", "Future"],
        image_url: "music/edm.png",
        audio_url: SHARED_AUDIO,
        category: Category::Signature,
        accent: "#FF85A2",
    },
];

impl StylePreset {
    /// Project the preset into the track the engine plays, resolving the
    /// audio and cover locators against `media_root`.
    pub fn to_track(&self, media_root: &Path) -> Track {
        Track {
            id: self.id.to_string(),
            title: self.title.to_string(),
            artist: CATALOG_ARTIST.to_string(),
            source: media_root.join(self.audio_url),
            cover: Some(media_root.join(self.image_url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_ids_are_unique() {
        for (i, a) in STYLE_PRESETS.iter().enumerate() {
            for b in &STYLE_PRESETS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn catalog_has_core_and_signature_presets() {
        let core = STYLE_PRESETS
            .iter()
            .filter(|p| p.category == Category::Core)
            .count();
        let signature = STYLE_PRESETS
            .iter()
            .filter(|p| p.category == Category::Signature)
            .count();
        assert_eq!(core, 6);
        assert_eq!(signature, 2);
    }

    #[test]
    fn to_track_resolves_locators_against_the_media_root() {
        let preset = &STYLE_PRESETS[0];
        let track = preset.to_track(Path::new("/srv/media"));

        assert_eq!(track.id, "dubstep");
        assert_eq!(track.title, "Dubstep");
        assert_eq!(
            track.source,
            Path::new("/srv/media/audio/dubstep.mp3")
        );
        assert_eq!(
            track.cover.as_deref(),
            Some(Path::new("/srv/media/music/dubstep.png"))
        );
        assert!(!track.artist.is_empty());
    }
}
