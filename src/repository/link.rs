use crate::domain::document::DocId;
use crate::domain::link::TrueLink;
use crate::errors::CandidateResult;
use crate::repository::{FileRepository, LinkReader, for_each_line};

/// Parses `<docA>\t<docB>`.
pub fn parse_link_line(line: &str) -> Result<TrueLink, String> {
    let mut fields = line.trim().split('\t');

    let (Some(source), Some(target), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err("expected exactly two tab-separated document ids".to_string());
    };

    let parse = |value: &str| {
        value
            .trim()
            .parse::<DocId>()
            .map_err(|e| format!("invalid document id `{value}`: {e}"))
    };

    Ok(TrueLink::new(parse(source)?, parse(target)?))
}

impl LinkReader for FileRepository {
    fn load_links(&self) -> CandidateResult<Vec<TrueLink>> {
        let mut links = Vec::new();

        for_each_line(&self.links_path, |line| {
            links.push(parse_link_line(line)?);
            Ok(())
        })?;

        log::info!(
            "Loaded {} true links from {}",
            links.len(),
            self.links_path.display()
        );

        Ok(links)
    }
}
