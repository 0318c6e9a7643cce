use super::*;
use diesel::sql_types::BigInt;

impl<'a> CityRepo for DbReadOnly<'a> {
    fn create_city(&self, _city: NewCity) -> Result<CityId> {
        unreachable!();
    }
    fn update_city_facts(&self, _id: CityId, _facts: &CityFacts) -> Result<()> {
        unreachable!();
    }
    fn delete_city(&self, _id: CityId) -> Result<usize> {
        unreachable!();
    }
    fn delete_cities(&self, _ids: &[CityId]) -> Result<usize> {
        unreachable!();
    }
    fn delete_all_cities(&self) -> Result<usize> {
        unreachable!();
    }

    fn get_city(&self, id: CityId) -> Result<City> {
        get_city(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_city(&self, id: CityId) -> Result<Option<City>> {
        try_get_city(&mut self.conn.borrow_mut(), id)
    }
    fn all_cities_chronologically(&self) -> Result<Vec<City>> {
        all_cities_chronologically(&mut self.conn.borrow_mut())
    }
    fn count_cities(&self) -> Result<usize> {
        count_cities(&mut self.conn.borrow_mut())
    }
    fn city_exists_with_place_id(&self, place_id: &str) -> Result<bool> {
        city_exists_with_place_id(&mut self.conn.borrow_mut(), place_id)
    }
    fn city_exists_in_locality(&self, locality: &str, country: &str) -> Result<bool> {
        city_exists_in_locality(&mut self.conn.borrow_mut(), locality, country)
    }
}

impl<'a> CityRepo for DbReadWrite<'a> {
    fn create_city(&self, city: NewCity) -> Result<CityId> {
        create_city(&mut self.conn.borrow_mut(), &city)
    }
    fn update_city_facts(&self, id: CityId, facts: &CityFacts) -> Result<()> {
        update_city_facts(&mut self.conn.borrow_mut(), id, facts)
    }
    fn delete_city(&self, id: CityId) -> Result<usize> {
        delete_cities(&mut self.conn.borrow_mut(), &[id])
    }
    fn delete_cities(&self, ids: &[CityId]) -> Result<usize> {
        delete_cities(&mut self.conn.borrow_mut(), ids)
    }
    fn delete_all_cities(&self) -> Result<usize> {
        delete_all_cities(&mut self.conn.borrow_mut())
    }

    fn get_city(&self, id: CityId) -> Result<City> {
        get_city(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_city(&self, id: CityId) -> Result<Option<City>> {
        try_get_city(&mut self.conn.borrow_mut(), id)
    }
    fn all_cities_chronologically(&self) -> Result<Vec<City>> {
        all_cities_chronologically(&mut self.conn.borrow_mut())
    }
    fn count_cities(&self) -> Result<usize> {
        count_cities(&mut self.conn.borrow_mut())
    }
    fn city_exists_with_place_id(&self, place_id: &str) -> Result<bool> {
        city_exists_with_place_id(&mut self.conn.borrow_mut(), place_id)
    }
    fn city_exists_in_locality(&self, locality: &str, country: &str) -> Result<bool> {
        city_exists_in_locality(&mut self.conn.borrow_mut(), locality, country)
    }
}

impl<'a> CityRepo for DbConnection<'a> {
    fn create_city(&self, city: NewCity) -> Result<CityId> {
        create_city(&mut self.conn.borrow_mut(), &city)
    }
    fn update_city_facts(&self, id: CityId, facts: &CityFacts) -> Result<()> {
        update_city_facts(&mut self.conn.borrow_mut(), id, facts)
    }
    fn delete_city(&self, id: CityId) -> Result<usize> {
        delete_cities(&mut self.conn.borrow_mut(), &[id])
    }
    fn delete_cities(&self, ids: &[CityId]) -> Result<usize> {
        delete_cities(&mut self.conn.borrow_mut(), ids)
    }
    fn delete_all_cities(&self) -> Result<usize> {
        delete_all_cities(&mut self.conn.borrow_mut())
    }

    fn get_city(&self, id: CityId) -> Result<City> {
        get_city(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_city(&self, id: CityId) -> Result<Option<City>> {
        try_get_city(&mut self.conn.borrow_mut(), id)
    }
    fn all_cities_chronologically(&self) -> Result<Vec<City>> {
        all_cities_chronologically(&mut self.conn.borrow_mut())
    }
    fn count_cities(&self) -> Result<usize> {
        count_cities(&mut self.conn.borrow_mut())
    }
    fn city_exists_with_place_id(&self, place_id: &str) -> Result<bool> {
        city_exists_with_place_id(&mut self.conn.borrow_mut(), place_id)
    }
    fn city_exists_in_locality(&self, locality: &str, country: &str) -> Result<bool> {
        city_exists_in_locality(&mut self.conn.borrow_mut(), locality, country)
    }
}

fn create_city(conn: &mut SqliteConnection, city: &NewCity) -> Result<CityId> {
    let model = into_new_city(city)?;
    diesel::insert_into(schema::cities::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = diesel::select(diesel::dsl::sql::<BigInt>("last_insert_rowid()"))
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(id.into())
}

fn update_city_facts(conn: &mut SqliteConnection, id: CityId, facts: &CityFacts) -> Result<()> {
    use schema::cities::dsl;
    let model = models::CityFacts {
        area_km2: facts.area_km2,
        population: population_value(facts.population)?,
        elevation_m: facts.elevation_m,
    };
    let count = diesel::update(dsl::cities.filter(dsl::id.eq(id.to_inner())))
        .set(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn delete_cities(conn: &mut SqliteConnection, ids: &[CityId]) -> Result<usize> {
    use schema::cities::dsl;
    if ids.is_empty() {
        return Ok(0);
    }
    let ids: Vec<_> = ids.iter().copied().map(CityId::to_inner).collect();
    diesel::delete(dsl::cities.filter(dsl::id.eq_any(ids)))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn delete_all_cities(conn: &mut SqliteConnection) -> Result<usize> {
    diesel::delete(schema::cities::table)
        .execute(conn)
        .map_err(from_diesel_err)
}

fn get_city(conn: &mut SqliteConnection, id: CityId) -> Result<City> {
    use schema::cities::dsl;
    let city = dsl::cities
        .filter(dsl::id.eq(id.to_inner()))
        .first::<models::City>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_city(city))
}

fn try_get_city(conn: &mut SqliteConnection, id: CityId) -> Result<Option<City>> {
    match get_city(conn, id) {
        Ok(city) => Ok(Some(city)),
        Err(repo::Error::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

fn all_cities_chronologically(conn: &mut SqliteConnection) -> Result<Vec<City>> {
    use schema::cities::dsl;
    Ok(dsl::cities
        .order_by((dsl::unlocked_at.desc(), dsl::id.desc()))
        .load::<models::City>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_city)
        .collect())
}

fn count_cities(conn: &mut SqliteConnection) -> Result<usize> {
    Ok(schema::cities::table
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn city_exists_with_place_id(conn: &mut SqliteConnection, place_id: &str) -> Result<bool> {
    use schema::cities::dsl;
    diesel::select(diesel::dsl::exists(
        dsl::cities.filter(dsl::place_id.eq(place_id)),
    ))
    .get_result(conn)
    .map_err(from_diesel_err)
}

fn city_exists_in_locality(
    conn: &mut SqliteConnection,
    locality: &str,
    country: &str,
) -> Result<bool> {
    use schema::cities::dsl;
    diesel::select(diesel::dsl::exists(
        dsl::cities
            .filter(dsl::locality.eq(locality))
            .filter(dsl::country.eq(country)),
    ))
    .get_result(conn)
    .map_err(from_diesel_err)
}
