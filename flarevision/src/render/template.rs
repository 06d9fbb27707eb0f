//! Static parts of the report document.

/// Inline stylesheet.
pub const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; margin: 20px; }
        h1, h2 { color: #333; }
        table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f4f4f4; }
        .search-bar { margin-bottom: 20px; }
        .search-bar input { width: 100%; padding: 10px; font-size: 16px; }
    "#;

/// Client-side filter bound to `#searchInput`.
///
/// For every table, hides each data row (row 0 is the header) with no cell
/// containing the lower-cased query, then hides the table if no row is left.
pub const SCRIPT: &str = r#"
        function searchTable() {
            const input = document.getElementById('searchInput');
            const filter = input.value.toLowerCase();
            const tables = document.querySelectorAll('table');

            tables.forEach(table => {
                const rows = table.getElementsByTagName('tr');
                let hasVisibleRow = false;

                for (let i = 1; i < rows.length; i++) { // Skip the header row
                    const cells = rows[i].getElementsByTagName('td');
                    let rowVisible = false;

                    for (let j = 0; j < cells.length; j++) {
                        if (cells[j].textContent.toLowerCase().includes(filter)) {
                            rowVisible = true;
                            break;
                        }
                    }

                    rows[i].style.display = rowVisible ? '' : 'none';
                    if (rowVisible) hasVisibleRow = true;
                }

                // Show/hide the table based on whether any rows are visible
                table.style.display = hasVisibleRow ? '' : 'none';
            });
        }
    "#;

/// Search box wired to [`SCRIPT`].
pub const SEARCH_BAR: &str = r#"<div class="search-bar">
        <input type="text" id="searchInput" onkeyup="searchTable()" placeholder="Search for data...">
    </div>"#;
