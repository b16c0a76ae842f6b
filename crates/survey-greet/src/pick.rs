use crate::error::{Error, Result};
use crate::types::Response;
use rand::Rng;

/// Choose one response uniformly at random.
pub fn pick<'a, R: Rng>(responses: &'a [Response], rng: &mut R) -> Result<&'a Response> {
    if responses.is_empty() {
        return Err(Error::NoResponses);
    }
    let i = rng.random_range(0..responses.len());
    Ok(&responses[i])
}

/// Message on the first line, respondent name on the second.
pub fn render(response: &Response) -> String {
    format!("{}\n{}", response.message, response.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn responses(n: usize) -> Vec<Response> {
        (0..n)
            .map(|i| Response::new(format!("name-{i}"), format!("message-{i}")))
            .collect()
    }

    #[test]
    fn test_pick_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = pick(&[], &mut rng).unwrap_err();
        assert!(matches!(err, Error::NoResponses));
        assert_eq!(err.to_string(), "No responses available");
    }

    #[test]
    fn test_pick_single() {
        let list = responses(1);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(pick(&list, &mut rng).unwrap(), &list[0]);
        }
    }

    #[test]
    fn test_pick_deterministic_with_seed() {
        let list = responses(10);
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..20).map(|_| pick(&list, &mut rng).unwrap().clone()).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..20).map(|_| pick(&list, &mut rng).unwrap().clone()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_response_reachable() {
        let list = responses(5);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let chosen = pick(&list, &mut rng).unwrap();
            let idx = list.iter().position(|r| r == chosen).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_render() {
        let r = Response::new("Ann", "Happy birthday!");
        assert_eq!(render(&r), "Happy birthday!\nAnn");
    }
}
