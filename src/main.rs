use sparsum::{Error, Polynomial};

fn main() -> Result<(), Error> {
    env_logger::init();

    let p1 = Polynomial::from_terms([
        (vec![2, 1], 4.0),
        (vec![0], -1.0),
        (vec![], 3.0),
    ])?;
    println!("{p1}");
    let p2 = Polynomial::from_terms([(Vec::<u32>::new(), 4.4)])?;
    println!("{p2}");
    let p3 = &p1 + &p2;
    println!("{p3}");
    Ok(())
}
