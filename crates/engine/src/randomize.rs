//! Constrained-random palette generation.

use malitrack_color::{high_contrast_foreground, HslColor};
use malitrack_theme::ColorRole;
use rand::Rng;

use crate::OverrideSet;

/// Pull a lightness `amount` points toward the 50% midpoint, without
/// crossing it.
fn toward_mid(l: f32, amount: f32) -> f32 {
    if l > 50.0 {
        (l - amount).max(50.0)
    } else {
        (l + amount).min(50.0)
    }
}

/// Push a lightness `amount` points away from the midpoint: light gets
/// lighter, dark gets darker. The constructor clamps at the ends.
fn away_from_mid(l: f32, amount: f32) -> f32 {
    if l > 50.0 {
        l + amount
    } else {
        l - amount
    }
}

/// An accent-like color: any hue, saturated enough to read as a color,
/// light enough to sit under a contrast-derived foreground.
fn sample_accent<R: Rng>(rng: &mut R) -> HslColor {
    HslColor::new(
        rng.gen_range(0.0..360.0),
        rng.gen_range(30.0..=100.0),
        rng.gen_range(20.0..=80.0),
    )
}

/// Generate a complete override set.
///
/// Values are produced in dependency order: the background comes first
/// and most of the chrome (card, border, input, muted, sidebar) derives
/// from it; every `-foreground` role is contrast-derived from its
/// already-generated base rather than sampled; ring copies primary. The
/// destructive pair is not generated at all — the caller passes the pair
/// to carry through unchanged, so danger colors keep their meaning.
pub(crate) fn random_override_set<R: Rng>(
    rng: &mut R,
    destructive: HslColor,
    destructive_foreground: HslColor,
) -> OverrideSet {
    let mut set = OverrideSet::new();

    // Background first; the saturation cap keeps page-sized surfaces calm.
    let background = HslColor::new(
        rng.gen_range(0.0..360.0),
        rng.gen_range(0.0..=50.0),
        rng.gen_range(10.0..=95.0),
    );
    set.set(ColorRole::Background, background);
    set.set(ColorRole::Foreground, high_contrast_foreground(background));

    // Cards sit slightly off the background; popover mirrors card.
    let card = background.with_lightness(away_from_mid(background.lightness(), 4.0));
    set.set(ColorRole::Card, card);
    set.set(ColorRole::CardForeground, high_contrast_foreground(card));
    set.set(ColorRole::Popover, card);
    set.set(ColorRole::PopoverForeground, high_contrast_foreground(card));

    let primary = sample_accent(rng);
    set.set(ColorRole::Primary, primary);
    set.set(
        ColorRole::PrimaryForeground,
        high_contrast_foreground(primary),
    );

    let secondary = sample_accent(rng);
    set.set(ColorRole::Secondary, secondary);
    set.set(
        ColorRole::SecondaryForeground,
        high_contrast_foreground(secondary),
    );

    let accent = sample_accent(rng);
    set.set(ColorRole::Accent, accent);
    set.set(ColorRole::AccentForeground, high_contrast_foreground(accent));

    set.set(ColorRole::Destructive, destructive);
    set.set(ColorRole::DestructiveForeground, destructive_foreground);

    // Chrome rows derive from the background. Input always equals border.
    let border = background.with_lightness(toward_mid(background.lightness(), 10.0));
    set.set(ColorRole::Border, border);
    set.set(ColorRole::Input, border);
    set.set(ColorRole::Ring, primary);

    let muted = HslColor::new(
        background.hue(),
        background.saturation() * 0.6,
        toward_mid(background.lightness(), 5.0),
    );
    set.set(ColorRole::Muted, muted);
    set.set(ColorRole::MutedForeground, high_contrast_foreground(muted));

    let sidebar = background.with_lightness(toward_mid(background.lightness(), 3.0));
    set.set(ColorRole::SidebarBackground, sidebar);
    set.set(
        ColorRole::SidebarForeground,
        high_contrast_foreground(sidebar),
    );

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(seed: u64) -> OverrideSet {
        let mut rng = StdRng::seed_from_u64(seed);
        random_override_set(
            &mut rng,
            HslColor::new(0.0, 84.2, 60.2),
            HslColor::new(0.0, 0.0, 98.0),
        )
    }

    #[test]
    fn test_every_role_is_present() {
        let set = generate(1);
        for role in ColorRole::ALL {
            assert!(set.get(role).is_some(), "{role} missing");
        }
    }

    #[test]
    fn test_sampled_values_stay_in_range() {
        for seed in 0..100 {
            let set = generate(seed);

            let background = set.get(ColorRole::Background).unwrap();
            assert!(background.saturation() <= 50.0, "seed {seed}");
            assert!(
                (10.0..=95.0).contains(&background.lightness()),
                "seed {seed}"
            );

            for role in [ColorRole::Primary, ColorRole::Secondary, ColorRole::Accent] {
                let color = set.get(role).unwrap();
                assert!(
                    (30.0..=100.0).contains(&color.saturation()),
                    "seed {seed} {role}"
                );
                assert!(
                    (20.0..=80.0).contains(&color.lightness()),
                    "seed {seed} {role}"
                );
            }
        }
    }

    #[test]
    fn test_foregrounds_contrast_their_bases() {
        for seed in 0..100 {
            let set = generate(seed);
            for base in ColorRole::ALL {
                // The destructive pair is carried, not derived.
                if base == ColorRole::Destructive {
                    continue;
                }
                if let Some(fg_role) = base.paired_foreground() {
                    let base_light = set.get(base).unwrap().lightness() > 50.0;
                    let fg_light = set.get(fg_role).unwrap().lightness() > 50.0;
                    assert_ne!(base_light, fg_light, "seed {seed} {base}");
                }
            }
        }
    }

    #[test]
    fn test_destructive_pair_is_carried_verbatim() {
        let destructive = HslColor::new(12.0, 70.0, 45.0);
        let foreground = HslColor::new(0.0, 0.0, 98.0);
        let mut rng = StdRng::seed_from_u64(7);
        let set = random_override_set(&mut rng, destructive, foreground);

        assert_eq!(set.get(ColorRole::Destructive), Some(destructive));
        assert_eq!(set.get(ColorRole::DestructiveForeground), Some(foreground));
    }

    #[test]
    fn test_derived_structure() {
        for seed in 0..100 {
            let set = generate(seed);
            assert_eq!(set.get(ColorRole::Border), set.get(ColorRole::Input));
            assert_eq!(set.get(ColorRole::Ring), set.get(ColorRole::Primary));
            assert_eq!(set.get(ColorRole::Popover), set.get(ColorRole::Card));
        }
    }

    #[test]
    fn test_lightness_nudges() {
        assert_eq!(toward_mid(95.0, 10.0), 85.0);
        assert_eq!(toward_mid(10.0, 10.0), 20.0);
        // Never crosses the midpoint.
        assert_eq!(toward_mid(52.0, 10.0), 50.0);
        assert_eq!(toward_mid(48.0, 10.0), 50.0);

        assert_eq!(away_from_mid(60.0, 4.0), 64.0);
        assert_eq!(away_from_mid(40.0, 4.0), 36.0);
    }
}
