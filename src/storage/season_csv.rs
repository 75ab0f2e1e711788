//! CSV season file loader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use super::StorageError;
use crate::models::SeasonRow;

/// Read every row of the season file at `path`, in file order.
///
/// Any malformed row fails the whole load.
pub fn load_season_rows(path: &Path) -> Result<Vec<SeasonRow>, StorageError> {
    if !path.exists() {
        return Err(StorageError::PathNotFound(path.to_path_buf()));
    }

    debug!("Loading season rows from {:?}", path);
    let file = File::open(path)?;
    let rows = read_season_rows(BufReader::new(file))?;

    info!("Loaded {} season rows from {:?}", rows.len(), path);
    Ok(rows)
}

/// Read season rows from any CSV source with a header line.
pub fn read_season_rows<R: Read>(rdr: R) -> Result<Vec<SeasonRow>, StorageError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let mut rows = Vec::new();
    for result in reader.deserialize::<SeasonRow>() {
        let row = result.map_err(StorageError::from_csv)?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const HEADER: &str = "rank,player,position,age,team,games,mins_played,FG,FGA,FG%,3P,3PA,3P%,2P,2PA,2P%,eFG%,FT,FTA,FT%,ORB,DRB,TRB,AST,STL,BLK,TOV,fouls,points";

    fn season_csv(rows: &[&str]) -> String {
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content.push('\n');
        content
    }

    #[test]
    fn test_read_rows_in_file_order() {
        let data = season_csv(&[
            "1,Precious Achiuwa,C,23,TOR,55,1140,196,404,0.485,29,108,0.269,167,296,0.564,0.521,87,124,0.702,100,228,328,50,31,30,59,102,508",
            "2,Steven Adams,C,29,MEM,42,1133,157,263,0.597,0,1,0.0,157,262,0.599,0.597,47,129,0.364,214,271,485,97,36,46,79,98,361",
        ]);

        let rows = read_season_rows(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].player, "Precious Achiuwa");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].team, "TOR");
        assert_eq!(rows[0].field_goal_pct, Some(0.485));
        assert_eq!(rows[0].points, 508);
        assert_eq!(rows[1].player, "Steven Adams");
        assert_eq!(rows[1].total_rebounds, 485);
        assert_eq!(rows[1].fouls, 98);
    }

    #[test]
    fn test_blank_percentage_is_none() {
        let data = season_csv(&[
            "9,Deep Bench,PG,21,CHO,3,6,0,0,,0,0,,0,0,,,0,0,,0,1,1,0,0,0,0,1,0",
        ]);

        let rows = read_season_rows(data.as_bytes()).unwrap();

        assert_eq!(rows[0].field_goal_pct, None);
        assert_eq!(rows[0].three_point_pct, None);
        assert_eq!(rows[0].effective_fg_pct, None);
        assert_eq!(rows[0].free_throw_pct, None);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let data = format!(
            "{},GS\n1,Jane Doe,SG,25,BOS,10,300,80,160,0.5,20,50,0.4,60,110,0.545,0.563,20,25,0.8,5,30,35,50,8,2,12,20,200,4\n",
            HEADER
        );

        let rows = read_season_rows(data.as_bytes()).unwrap();
        assert_eq!(rows[0].player, "Jane Doe");
        assert_eq!(rows[0].assists, 50);
    }

    #[test]
    fn test_malformed_row_fails_with_line() {
        let data = season_csv(&[
            "1,Jane Doe,SG,25,BOS,10,300,80,160,0.5,20,50,0.4,60,110,0.545,0.563,20,25,0.8,5,30,35,50,8,2,12,20,200",
            "2,John Roe,SG,twenty,BOS,10,300,80,160,0.5,20,50,0.4,60,110,0.545,0.563,20,25,0.8,5,30,35,50,8,2,12,20,200",
        ]);

        let err = read_season_rows(data.as_bytes()).unwrap_err();
        match err {
            StorageError::Csv { line, .. } => assert_eq!(line, 3),
            other => panic!("expected csv error, got {:?}", other),
        }
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        let rows = read_season_rows(season_csv(&[]).as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("season_stats.csv");

        let err = load_season_rows(&path).unwrap_err();
        assert!(matches!(err, StorageError::PathNotFound(p) if p == path));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("season_stats.csv");
        std::fs::write(
            &path,
            season_csv(&[
                "5,Jane Doe,SG,25,BOS,10,300,80,160,0.5,20,50,0.4,60,110,0.545,0.563,20,25,0.8,5,30,35,50,8,2,12,20,200",
            ]),
        )
        .unwrap();

        let rows = load_season_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rank, 5);
    }
}
