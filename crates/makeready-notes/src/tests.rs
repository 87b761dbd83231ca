//! Interpretation flow tests for the note pipeline

#[cfg(test)]
mod tests {
    use crate::{CompanyEntry, NotePipeline, NotesError, TokenLabel, Vocabulary};
    use makeready_domain::{Cell, Pole};

    const LOOP: &str = "Loop Telecom Pennsylvania LLC";
    const LOOP_LABEL: &str = "LOOP INTERNET HOLDCO LLC";

    fn pipeline() -> NotePipeline {
        NotePipeline::with_default_vocabulary().unwrap()
    }

    fn surveyed(id: &str, note: &str) -> Pole {
        Pole::new(id)
            .with_note(note)
            .with_tags("VZ-".to_string() + id, "PPL-".to_string() + id)
            .with_address("120 Birch St, Dunmore, PA")
            .with_location(41.41, -75.63)
    }

    #[test]
    fn test_attach_line_with_custom_company() {
        let mut vocabulary = Vocabulary::default();
        vocabulary.companies.push(CompanyEntry {
            pattern: "PPL".to_string(),
            label: "PPL ELECTRIC".to_string(),
        });
        vocabulary.hardware.push("Co".to_string());
        vocabulary.attachment_types.push(TokenLabel {
            token: "Co".to_string(),
            label: "Cable/Strand".to_string(),
        });
        let pipeline = NotePipeline::new(vocabulary).unwrap();

        let output = pipeline
            .run(&[surveyed("10", "PPL Co at 20-6 Attach .")])
            .unwrap();
        assert_eq!(output.records.make_ready.len(), 1);
        let record = &output.records.make_ready[0];
        assert_eq!(record.attacher_company, "PPL ELECTRIC");
        assert_eq!(record.attachment_type, "Cable/Strand");
        assert_eq!(record.existing_height, "20'-6\"");
        assert_eq!(record.new_height, "20'-6\"");
        assert_eq!(record.action, "No Make Ready");
        assert_eq!(record.quantity, "1");
    }

    #[test]
    fn test_unknown_attachment_type_aborts() {
        let mut vocabulary = Vocabulary::default();
        vocabulary.hardware.push("Co".to_string());
        let pipeline = NotePipeline::new(vocabulary).unwrap();

        let result = pipeline.run(&[surveyed("11", "Comcast Co at 20-6 Attach")]);
        assert!(matches!(
            result,
            Err(NotesError::UnknownAttachmentType { ref token, .. }) if token == "Co"
        ));
    }

    #[test]
    fn test_raise_and_lower_across_lines() {
        let note = "Comcast Com at 20-6 Raise 18\n\nService Electric Company Strand at 22-0 Lower 6";
        let output = pipeline().run(&[surveyed("20", note)]).unwrap();
        let rows = &output.records.make_ready;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].attacher_company, "COMCAST");
        assert_eq!(rows[0].new_height, "22'-0\"");
        assert_eq!(rows[1].attacher_company, "SERVICE ELECTRIC CABLE TV");
        assert_eq!(rows[1].new_height, "21'-6\"");
    }

    #[test]
    fn test_reference_pole_produces_nothing() {
        let note = format!("{} Com at 20-6 Attach", LOOP);
        let output = pipeline().run(&[surveyed("12A", &note)]).unwrap();

        assert!(output.records.make_ready.is_empty());
        assert!(output.records.attachment_info.is_empty());
        assert!(output.records.pole_details.is_empty());
    }

    #[test]
    fn test_unsurveyed_pole_produces_placeholder() {
        let mut pole = surveyed("30", "");
        pole.note = Cell::Empty;
        let output = pipeline().run(&[pole]).unwrap();

        assert_eq!(output.records.make_ready.len(), 1);
        let row = &output.records.make_ready[0];
        assert_eq!(row.attacher_company, "Not Surveyed");
        assert_eq!(row.attachment_type, "n/a");
        assert_eq!(row.action, "n/a");
        assert_eq!(row.existing_height, "n/a");
        assert_eq!(row.new_height, "n/a");
        assert_eq!(row.quantity, "n/a");
        assert!(output.records.attachment_info.is_empty());
        assert!(output.records.pole_details.is_empty());
    }

    #[test]
    fn test_empty_note_text_is_surveyed() {
        let output = pipeline().run(&[surveyed("31", "")]).unwrap();
        assert!(output.records.make_ready.is_empty());
    }

    #[test]
    fn test_pole_details_deduplicated_per_pole() {
        let note = format!(
            "{loop_} Com at 20-6 Attach\n{loop_} Guy at 18-0 Attach",
            loop_ = LOOP
        );
        let other = format!("{} Strand at 21-0 Raise 12", LOOP);
        let poles = vec![surveyed("40", &note), surveyed("41", &other)];

        let output = pipeline().run(&poles).unwrap();

        assert_eq!(output.records.make_ready.len(), 3);
        assert_eq!(output.records.attachment_info.len(), 3);
        assert_eq!(output.records.pole_details.len(), 2);
        assert!(output
            .records
            .make_ready
            .iter()
            .all(|r| r.attacher_company == LOOP_LABEL));
        assert_eq!(output.records.pole_details[0].street_name, "Birch St");
    }

    #[test]
    fn test_one_bad_line_discards_the_whole_run() {
        let poles = vec![
            surveyed("50", "Comcast Com at 20-6 Attach"),
            surveyed("51", "Comcast Com at 20-13 Raise 6"),
            surveyed("52", "Comcast Com at 20-6 Attach"),
        ];

        let result = pipeline().run(&poles);
        match result {
            Err(NotesError::MalformedHeight { pole, .. }) => assert_eq!(pole, "51"),
            other => panic!("Expected MalformedHeight, got {:?}", other),
        }
    }

    #[test]
    fn test_accepted_line_without_anchor_fails() {
        let result = pipeline().run(&[surveyed("60", "Comcast Com 20-6 Attach")]);
        assert!(matches!(result, Err(NotesError::MissingHeightClause { .. })));
    }

    #[test]
    fn test_unrelated_lines_are_ignored() {
        let note = "PPL Primary at 30-0\nComcast drop to house\nCheck anchor";
        let output = pipeline().run(&[surveyed("70", note)]).unwrap();
        assert!(output.records.make_ready.is_empty());
        assert_eq!(output.stats.lines_discarded(), 3);
    }

    #[test]
    fn test_tags_flow_into_records() {
        let note = format!("{} Com at 20-6 Attach", LOOP);
        let output = pipeline().run(&[surveyed("80", &note)]).unwrap();

        let info = &output.records.attachment_info[0];
        assert_eq!(info.pole.telco_tag, Cell::text("VZ-80"));
        assert_eq!(info.pole.elco_tag, Cell::text("PPL-80"));
        assert_eq!(info.height, "20'-6\"");
    }
}
