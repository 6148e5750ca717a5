use reticle_types::CrosshairConfig;

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Produce the copy-pastable console command for a config: fourteen
/// clauses in the order the CS2 console expects, booleans as 1/0.
/// `cl_crosshaircolor 5` (custom color mode) and
/// `cl_crosshair_sniper_width 1` are emitted as constants; neither is
/// inferred from the screenshot.
pub fn command_string(config: &CrosshairConfig) -> String {
    [
        format!("cl_crosshairsize {}", config.size),
        format!("cl_crosshairthickness {}", config.thickness),
        format!("cl_crosshairgap {}", config.gap),
        format!("cl_crosshair_drawoutline {}", flag(config.draw_outline)),
        format!("cl_crosshair_outlinethickness {}", config.outline_thickness),
        format!("cl_crosshairdot {}", flag(config.dot)),
        "cl_crosshaircolor 5".to_string(),
        format!("cl_crosshaircolor_r {}", config.color_r),
        format!("cl_crosshaircolor_g {}", config.color_g),
        format!("cl_crosshaircolor_b {}", config.color_b),
        format!("cl_crosshairalpha {}", config.alpha),
        format!("cl_crosshairstyle {}", config.style),
        format!("cl_crosshair_t {}", flag(config.t_style)),
        "cl_crosshair_sniper_width 1".to_string(),
    ]
    .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> CrosshairConfig {
        CrosshairConfig {
            size: 3.0,
            thickness: 1.0,
            gap: -2.0,
            draw_outline: true,
            outline_thickness: 1.0,
            dot: true,
            color_r: 0,
            color_g: 255,
            color_b: 0,
            alpha: 255,
            style: 4,
            t_style: false,
        }
    }

    #[test]
    fn produces_the_expected_console_line() {
        assert_eq!(
            command_string(&sample_config()),
            "cl_crosshairsize 3; cl_crosshairthickness 1; cl_crosshairgap -2; \
             cl_crosshair_drawoutline 1; cl_crosshair_outlinethickness 1; \
             cl_crosshairdot 1; cl_crosshaircolor 5; cl_crosshaircolor_r 0; \
             cl_crosshaircolor_g 255; cl_crosshaircolor_b 0; cl_crosshairalpha 255; \
             cl_crosshairstyle 4; cl_crosshair_t 0; cl_crosshair_sniper_width 1"
        );
    }

    #[test]
    fn always_fourteen_clauses_in_stable_order() {
        let command = command_string(&sample_config());
        let clauses: Vec<&str> = command.split("; ").collect();
        assert_eq!(clauses.len(), 14);

        let keys: Vec<&str> = clauses
            .iter()
            .map(|c| c.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(
            keys,
            [
                "cl_crosshairsize",
                "cl_crosshairthickness",
                "cl_crosshairgap",
                "cl_crosshair_drawoutline",
                "cl_crosshair_outlinethickness",
                "cl_crosshairdot",
                "cl_crosshaircolor",
                "cl_crosshaircolor_r",
                "cl_crosshaircolor_g",
                "cl_crosshaircolor_b",
                "cl_crosshairalpha",
                "cl_crosshairstyle",
                "cl_crosshair_t",
                "cl_crosshair_sniper_width"
            ]
        );
    }

    #[test]
    fn booleans_render_as_zero_or_one() {
        let mut config = sample_config();
        config.draw_outline = false;
        config.dot = false;
        config.t_style = true;

        let command = command_string(&config);
        assert!(command.contains("cl_crosshair_drawoutline 0"));
        assert!(command.contains("cl_crosshairdot 0"));
        assert!(command.contains("cl_crosshair_t 1"));
    }

    #[test]
    fn fractional_values_keep_their_precision() {
        let mut config = sample_config();
        config.size = 2.5;
        config.thickness = 0.5;
        let command = command_string(&config);
        assert!(command.contains("cl_crosshairsize 2.5"));
        assert!(command.contains("cl_crosshairthickness 0.5"));
    }

    #[test]
    fn serialization_is_idempotent() {
        let config = sample_config();
        assert_eq!(command_string(&config), command_string(&config));
    }

    #[test]
    fn fixed_clauses_ignore_the_config() {
        let mut config = sample_config();
        config.color_r = 200;
        config.style = 5;
        let command = command_string(&config);
        assert!(command.contains("cl_crosshaircolor 5;"));
        assert!(command.ends_with("cl_crosshair_sniper_width 1"));
    }
}
