//! Integration tests for hf-output.

#[cfg(test)]
fn scripted_sim() -> hf_sim::Simulator {
    use hf_agent::{Agent, Collider};
    use hf_core::{FieldSize, Point2D};

    let traveler = Agent::new(
        Point2D::new(5.0, 5.0),
        Point2D::ZERO,
        Collider::new(2.0).unwrap(),
    );
    let hornets = vec![
        Agent::new(Point2D::new(1.0, 1.0), Point2D::ZERO, Collider::new(1.0).unwrap()),
        Agent::new(Point2D::new(5.0, 6.0), Point2D::ZERO, Collider::new(1.0).unwrap()),
    ];
    hf_sim::Simulator::new(traveler, hornets, FieldSize::new(12, 10))
}

#[cfg(test)]
mod color {
    use crate::Color;

    #[test]
    fn parse_palette_names() {
        assert_eq!("yellow".parse::<Color>().unwrap(), Color::new(255, 255, 0));
        assert_eq!("Blue".parse::<Color>().unwrap(), Color::new(0, 0, 255));
        assert!("purple".parse::<Color>().is_err());
        assert_eq!(
            Color::names().collect::<Vec<_>>(),
            ["white", "black", "red", "green", "blue", "yellow"]
        );
    }

    #[test]
    fn lighten_and_darken() {
        assert_eq!(Color::BLACK.lighten(0.5), Color::new(127, 127, 127));
        assert_eq!(Color::new(255, 0, 0).lighten(0.5), Color::new(255, 127, 127));
        assert_eq!(Color::new(0, 0, 255).darken(0.5), Color::new(0, 0, 127));
        assert_eq!(Color::new(10, 20, 30).lighten(1.0), Color::WHITE);
        assert_eq!(Color::new(10, 20, 30).darken(1.0), Color::BLACK);
        assert_eq!(Color::new(10, 20, 30).lighten(0.0), Color::new(10, 20, 30));
        assert_eq!(Color::new(10, 20, 30).darken(0.0), Color::new(10, 20, 30));
    }

    #[test]
    fn display_hex() {
        assert_eq!(Color::new(255, 0, 16).to_string(), "#ff0010");
    }
}

#[cfg(test)]
mod canvas {
    use hf_core::Point2D;

    use crate::{Canvas, Color, PixelCanvas};

    #[test]
    fn fill_paints_everything() {
        let mut c = PixelCanvas::new(4, 3);
        c.fill(Color::WHITE);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(c.pixel(x, y), Some(Color::WHITE));
            }
        }
        assert_eq!(c.pixel(4, 0), None);
    }

    #[test]
    fn circle_is_a_disc() {
        let mut c = PixelCanvas::new(9, 9);
        let red = Color::new(255, 0, 0);
        c.draw_circle(Point2D::new(4.0, 4.0), 2.0, red);
        assert_eq!(c.pixel(4, 4), Some(red));
        assert_eq!(c.pixel(6, 4), Some(red)); // on the rim
        assert_eq!(c.pixel(4, 2), Some(red));
        assert_eq!(c.pixel(6, 6), Some(Color::BLACK)); // corner of bbox, outside
        assert_eq!(c.pixel(7, 4), Some(Color::BLACK));
    }

    #[test]
    fn circle_is_clipped_at_edges() {
        let mut c = PixelCanvas::new(5, 5);
        let blue = Color::new(0, 0, 255);
        c.draw_circle(Point2D::new(-1.0, 2.0), 2.0, blue);
        assert_eq!(c.pixel(0, 2), Some(blue));
        assert_eq!(c.pixel(1, 2), Some(blue));
        assert_eq!(c.pixel(2, 2), Some(Color::BLACK));

        // Entirely outside: nothing drawn, no panic.
        c.draw_circle(Point2D::new(50.0, 50.0), 3.0, blue);
        c.draw_circle(Point2D::new(f64::NAN, 1.0), 3.0, blue);
    }

    #[test]
    fn overlay_replaces_previous_text() {
        let mut c = PixelCanvas::new(2, 1);
        c.overlay_text(&["a".to_owned(), "b".to_owned()]);
        c.overlay_text(&["Iteration: 1".to_owned()]);
        assert_eq!(c.overlay(), ["Iteration: 1"]);
    }

    #[test]
    fn png_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("frame.png");

        let mut c = PixelCanvas::new(3, 2);
        c.fill(Color::new(1, 2, 3));
        c.draw_circle(Point2D::new(2.0, 1.0), 0.0, Color::WHITE);
        c.save_png(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3]);
        assert_eq!(img.get_pixel(2, 1).0, [255, 255, 255]);
        assert_eq!(&img, c.image());
    }

    #[test]
    fn save_into_missing_dir_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let c = PixelCanvas::new(2, 2);
        assert!(c.save_png(&dir.path().join("nope").join("f.png")).is_err());
    }
}

#[cfg(test)]
mod render {
    use super::scripted_sim;
    use crate::{FrameRenderer, PixelCanvas, RenderConfig};

    #[test]
    fn traveler_color_follows_collision_state() {
        let mut sim = scripted_sim();
        let renderer = FrameRenderer::new(RenderConfig::default());
        assert_eq!(renderer.traveler_color(&sim), renderer.config.traveler_color);

        assert!(sim.collision());
        assert_eq!(
            renderer.traveler_color(&sim),
            renderer.config.traveler_collision_color
        );
    }

    #[test]
    fn draws_lightened_discs_and_dark_centres() {
        let mut sim = scripted_sim();
        sim.tick();
        let renderer = FrameRenderer::default();
        let cfg = renderer.config.clone();
        let mut canvas = PixelCanvas::new(12, 10);
        renderer.draw(&sim, &mut canvas);

        // Background far from every agent.
        assert_eq!(canvas.pixel(11, 0), Some(cfg.surface_color));
        // Hornet 0 centre dot, darkened.
        assert_eq!(canvas.pixel(1, 1), Some(cfg.hornet_color.darken(0.5)));
        // Traveler body (colliding with hornet 1), not covered by any hornet.
        assert_eq!(
            canvas.pixel(5, 3),
            Some(cfg.traveler_collision_color.lighten(0.5))
        );
        // Hornets are drawn over the traveler.
        assert_eq!(canvas.pixel(5, 6), Some(cfg.hornet_color.darken(0.5)));
    }
}

#[cfg(test)]
mod hud {
    use super::scripted_sim;
    use crate::hud_lines;

    #[test]
    fn four_aligned_lines() {
        let mut sim = scripted_sim();
        sim.tick();
        let lines = hud_lines(&sim, 42, Some(100));
        assert_eq!(
            lines,
            vec![
                format!("Iteration: {:>12} / 100", 1),
                format!("Time (ms): {:>12}", 42),
                format!("Run count: {:>12}", 0),
                format!("collision count: {:>6}", 1),
            ]
        );
    }

    #[test]
    fn unbounded_run_shows_inf() {
        let sim = scripted_sim();
        assert!(hud_lines(&sim, 0, None)[0].ends_with("/ inf"));
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOTS_FILE, SUMMARIES_FILE};
    use crate::row::{AgentKind, AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent: u32, iteration: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            iteration,
            agent,
            kind:      if agent == 0 { AgentKind::Traveler } else { AgentKind::Hornet },
            x:         agent as f64,
            y:         1.5,
            vx:        -2.0,
            vy:        0.0,
            radius:    5.0,
            colliding: false,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(SNAPSHOTS_FILE).exists());
        assert!(dir.path().join(SUMMARIES_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["iteration", "agent", "kind", "x", "y", "vx", "vy", "radius", "colliding"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["iteration", "traveler_run_count", "collision_count", "colliding_hornets"]
        );
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "5");
        assert_eq!(&rows[0][2], "traveler");
        assert_eq!(&rows[1][2], "hornet");
        assert_eq!(&rows[2][1], "2");
        assert_eq!(&rows[2][4], "1.5");
        assert_eq!(&rows[2][5], "-2");
        assert_eq!(&rows[2][8], "0");
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = TickSummaryRow {
            iteration:          3,
            traveler_run_count: 1,
            collision_count:    7,
            colliding_hornets:  2,
        };
        w.write_tick_summary(&row).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["3", "1", "7", "2"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod observers {
    use hf_core::SimRng;
    use hf_sim::{Simulator, SimulatorConfig};
    use tempfile::TempDir;

    use super::scripted_sim;
    use crate::csv::{CsvWriter, SNAPSHOTS_FILE, SUMMARIES_FILE};
    use crate::frames::frame_file_name;
    use crate::{FrameExporter, FrameRenderer, SimOutputObserver};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn output_observer_writes_summaries_and_snapshots() {
        let dir = tmp();
        let config = SimulatorConfig {
            hornet_count: 4,
            field_size: hf_core::FieldSize::new(50, 40),
            ..SimulatorConfig::default()
        };
        let mut sim = Simulator::from_config(&config, &mut SimRng::new(1)).unwrap();

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, 2);
        let ran = sim.run(Some(6), &mut obs);
        assert_eq!(ran, 6);
        assert!(obs.take_error().is_none());

        let mut summaries = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        assert_eq!(summaries.records().count(), 6);

        // Snapshots at iterations 2, 4, 6; traveler + 4 hornets each.
        let mut snaps = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let rows: Vec<_> = snaps.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3 * 5);
        assert_eq!(&rows[0][0], "2");
        assert_eq!(&rows[0][2], "traveler");
        assert_eq!(&rows[14][0], "6");
        assert_eq!(&rows[14][1], "4");
    }

    #[test]
    fn snapshot_marks_colliding_hornets() {
        let dir = tmp();
        let mut sim = scripted_sim();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, 1);
        sim.run_ticks(1, &mut obs);
        obs.finish();

        let mut snaps = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let flags: Vec<String> = snaps.records().map(|r| r.unwrap()[8].to_owned()).collect();
        assert_eq!(flags, ["1", "0", "1"]);
    }

    #[test]
    fn frame_exporter_writes_one_image_per_tick() {
        let dir = tmp();
        let mut sim = scripted_sim();
        let mut exporter = FrameExporter::new(FrameRenderer::default(), &sim, dir.path(), Some(3));
        sim.run(Some(3), &mut exporter);

        assert!(exporter.take_error().is_none());
        assert_eq!(exporter.frames(), 3);
        for i in 1..=3 {
            assert!(dir.path().join(frame_file_name(i)).exists(), "frame {i}");
        }
        assert_eq!(frame_file_name(12), "frame_00012.png");

        let img = image::open(dir.path().join(frame_file_name(3))).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (12, 10));
        assert_eq!(&img, exporter.canvas().image());
        assert_eq!(exporter.canvas().overlay().len(), 4);
    }

    #[test]
    fn frame_clock_starts_at_first_tick() {
        let dir = tmp();
        let mut sim = scripted_sim();
        let mut exporter = FrameExporter::new(FrameRenderer::default(), &sim, dir.path(), Some(1));
        std::thread::sleep(std::time::Duration::from_millis(300));
        sim.run(Some(1), &mut exporter);

        let time_line = &exporter.canvas().overlay()[1];
        let ms: u128 = time_line.rsplit(' ').next().unwrap().parse().unwrap();
        assert!(ms < 300, "{time_line}");
    }

    #[test]
    fn frame_exporter_keeps_first_error() {
        let dir = tmp();
        let missing = dir.path().join("missing");
        let mut sim = scripted_sim();
        let mut exporter = FrameExporter::new(FrameRenderer::default(), &sim, &missing, None);
        sim.run_ticks(2, &mut exporter);
        assert_eq!(exporter.frames(), 0);
        assert!(exporter.take_error().is_some());
        assert!(exporter.take_error().is_none());
    }
}
