/// Percolation grid: an n-by-n lattice of blocked/open sites
///
/// Two union-find structures are kept in lockstep. `percolation` holds the
/// virtual Top (index 0) and Bottom (index n²+1) anchors and answers whether
/// the system percolates. `fullness` holds only Top and answers whether a site
/// is full. Bottom-row sites are linked to the Bottom anchor in `percolation`
/// only, so a percolating system never makes unrelated bottom sites look full
/// through the Bottom anchor (backwash).
use crate::error::{PercolationError, Result};
use crate::union_find::UnionFind;

/// Flat index of the virtual Top anchor in both structures
const TOP: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiteState {
    #[default]
    Blocked,
    Open,
}

/// A coordinate already checked against the grid bounds
///
/// Sites map to flat indices as `row * n + col + 1`; slot 0 is Top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    row: usize,
    col: usize,
    index: usize,
}

impl Site {
    fn checked(row: i64, col: i64, n: usize) -> Result<Self> {
        let in_bounds = |v: i64| v >= 0 && (v as u64) < n as u64;
        if !in_bounds(row) || !in_bounds(col) {
            return Err(PercolationError::InvalidArgument(format!(
                "site ({row}, {col}) outside {n}x{n} grid"
            )));
        }
        Ok(Self::at(row as usize, col as usize, n))
    }

    fn at(row: usize, col: usize, n: usize) -> Self {
        Site {
            row,
            col,
            index: row * n + col + 1,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Position of this site in the site-state array
    fn slot(&self) -> usize {
        self.index - 1
    }
}

/// Which structures receive a union
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Both,
    PercolationOnly,
}

#[derive(Debug, Clone)]
pub struct PercolationGrid {
    n: usize,
    sites: Vec<SiteState>,
    open_count: usize,
    percolation: UnionFind,
    fullness: UnionFind,
}

impl PercolationGrid {
    /// Create an n-by-n grid with every site blocked
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid dimension must be positive".to_string(),
            ));
        }
        let site_count = n.checked_mul(n).ok_or_else(|| {
            PercolationError::InvalidArgument(format!("grid dimension {n} is too large"))
        })?;

        Ok(PercolationGrid {
            n,
            sites: vec![SiteState::Blocked; site_count],
            open_count: 0,
            percolation: UnionFind::new(site_count + 2),
            fullness: UnionFind::new(site_count + 1),
        })
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Total number of real sites, n²
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    fn bottom(&self) -> usize {
        self.sites.len() + 1
    }

    pub fn site(&self, row: i64, col: i64) -> Result<Site> {
        Site::checked(row, col, self.n)
    }

    fn state(&self, site: Site) -> SiteState {
        self.sites[site.slot()]
    }

    /// In-bounds orthogonal neighbors of a site
    fn neighbors(&self, site: Site) -> impl Iterator<Item = Site> + '_ {
        let (row, col) = (site.row, site.col);
        let up = row.checked_sub(1).map(|r| (r, col));
        let down = (row + 1 < self.n).then_some((row + 1, col));
        let left = col.checked_sub(1).map(|c| (row, c));
        let right = (col + 1 < self.n).then_some((row, col + 1));
        [up, down, left, right]
            .into_iter()
            .flatten()
            .map(move |(r, c)| Site::at(r, c, self.n))
    }

    /// Unions owed by a newly opened site, with the structures each one reaches
    fn links(&self, site: Site) -> Vec<(usize, Scope)> {
        let mut links = Vec::with_capacity(6);
        if site.row == 0 {
            links.push((TOP, Scope::Both));
        }
        if site.row == self.n - 1 {
            links.push((self.bottom(), Scope::PercolationOnly));
        }
        links.extend(
            self.neighbors(site)
                .filter(|&neighbor| self.state(neighbor) == SiteState::Open)
                .map(|neighbor| (neighbor.index, Scope::Both)),
        );
        links
    }

    fn link(&mut self, index: usize, partner: usize, scope: Scope) -> Result<()> {
        self.percolation.union(index, partner)?;
        if scope == Scope::Both {
            self.fullness.union(index, partner)?;
        }
        Ok(())
    }

    /// Open the site (row, col); opening an open site does nothing
    pub fn open(&mut self, row: i64, col: i64) -> Result<()> {
        let site = self.site(row, col)?;
        if self.state(site) == SiteState::Open {
            return Ok(());
        }

        self.sites[site.slot()] = SiteState::Open;
        self.open_count += 1;

        for (partner, scope) in self.links(site) {
            self.link(site.index, partner, scope)?;
        }
        Ok(())
    }

    pub fn is_open(&self, row: i64, col: i64) -> Result<bool> {
        let site = self.site(row, col)?;
        Ok(self.state(site) == SiteState::Open)
    }

    /// Is the site connected to the top row through open sites?
    ///
    /// Takes `&mut self` because the lookup compresses union-find paths.
    pub fn is_full(&mut self, row: i64, col: i64) -> Result<bool> {
        let site = self.site(row, col)?;
        self.fullness.connected(TOP, site.index)
    }

    pub fn open_site_count(&self) -> usize {
        self.open_count
    }

    /// Does some open path join the top row to the bottom row?
    pub fn percolates(&mut self) -> Result<bool> {
        let bottom = self.bottom();
        self.percolation.connected(TOP, bottom)
    }
}
